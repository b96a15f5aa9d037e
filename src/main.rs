//! Guidebook demo: opens the configured book, bookmarks a page, cycles its
//! color, persists the state and prints a share code.
//!
//! Set `RUST_LOG=debug` for detailed logging.

use std::error::Error;

use guidebook::buffer::FinalSerializable;
use guidebook::database::Database;
use guidebook::managers::guide_book_state::GuideBookState;
use guidebook::managers::guide_book_store::{GuideBookStore, GuideBookStoreTrait};
use guidebook::services::book_contents::{BookContents, DEBUG_FILE};
use guidebook::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use guidebook::services::share_code;
use guidebook::types::color::MinecraftColor;
use guidebook::types::geometry::Rectangle;
use guidebook::types::page::ActionListener;

/// Prints link clicks instead of navigating.
struct PrintingListener;

impl ActionListener for PrintingListener {
    fn on_page_link_click(&mut self, page: &str) {
        println!("  link -> page {}", page);
    }

    fn on_web_link_click(&mut self, url: &str) {
        println!("  link -> web {}", url);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings_engine = SettingsEngine::new(None);
    let settings = settings_engine.load()?;
    println!("Settings: {}", settings_engine.get_config_path());

    let catalog = BookContents::with_defaults();
    let db = Database::open_in_data_dir(&settings.storage.database_file)?;
    let store = GuideBookStore::new(db.connection());

    let mut book = match store.load(&settings.storage.owner, &catalog, settings.book.max_bookmarks)? {
        Some(book) => book,
        None => GuideBookState::opened_at(&catalog, &settings.book.start_page, settings.book.max_bookmarks),
    };
    println!(
        "Open page: {} ({}), {} bookmark(s)",
        book.current_page().title(),
        book.current_page().page(),
        book.bookmarks().len()
    );

    if !book.is_bookmarked(DEBUG_FILE) {
        book.change_page(DEBUG_FILE);
        match book.add_bookmark(DEBUG_FILE) {
            Ok(color) => println!("Bookmarked {} in {}", DEBUG_FILE, MinecraftColor::from_id(color).name()),
            Err(e) => println!("Could not bookmark {}: {}", DEBUG_FILE, e),
        }
    }
    if book.is_bookmarked(DEBUG_FILE) {
        let color = book.cycle_bookmark_color(DEBUG_FILE, false)?;
        println!("Cycled {} to {}", DEBUG_FILE, MinecraftColor::from_id(color).name());
    }

    let area = Rectangle::new(0, 0, 240, 40);
    let page = book.current_page();
    page.set_drawables_position(area);
    page.update_scroll_position(area);
    println!("Clicking every visible line of {}:", page.page());
    for y in (area.y0..area.y1()).step_by(10) {
        page.mouse_clicked(1, y, area, &mut PrintingListener);
    }

    let bytes = book.to_bytes()?;
    store.save(&settings.storage.owner, &book)?;
    println!("Saved {} bytes for {}", bytes.len(), settings.storage.owner);
    println!("Share code: {}", share_code::encode(book.current_page())?);
    Ok(())
}
