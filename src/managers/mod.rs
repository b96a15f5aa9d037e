// Guidebook state managers
// Managers own book state and its persistence.

pub mod guide_book_state;
pub mod guide_book_store;
