//! Unit tests for the database layer (connection + migrations).

use guidebook::database::migrations::{self, CURRENT_SCHEMA_VERSION};
use guidebook::database::Database;
use tempfile::TempDir;

fn object_exists(db: &Database, kind: &str, name: &str) -> bool {
    db.connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap_or(false)
}

#[test]
fn test_migrations_create_schema() {
    let db = Database::open_in_memory().expect("open_in_memory failed");

    assert!(object_exists(&db, "table", "schema_version"));
    assert!(object_exists(&db, "table", "guide_book_states"));
    assert!(object_exists(&db, "index", "idx_guide_book_states_updated_at"));
    assert_eq!(db.schema_version(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    migrations::run_all(db.connection()).expect("second run should succeed");

    let recorded: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(recorded, CURRENT_SCHEMA_VERSION as i64);
}

#[test]
fn test_file_database_persists_between_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guidebook.db");

    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO guide_book_states (id, owner, data, updated_at) VALUES ('1', 'alice', x'00', 0)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM guide_book_states", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
