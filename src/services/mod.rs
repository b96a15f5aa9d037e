// Guidebook services
// Services provide the page catalog, settings persistence and share codes.

pub mod book_contents;
pub mod settings_engine;
pub mod share_code;
