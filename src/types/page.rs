//! Contracts for the page catalog and rendered pages that saved pages
//! resolve against.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::geometry::Rectangle;

/// Page opened when no saved page could be loaded.
pub const DEBUG_FILE: &str = "/debug/debug_page.md";
/// Landing page of a freshly opened book.
pub const MAIN_MENU_FILE: &str = "/main_menu.md";

/// Front matter of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub icon: Option<String>,
}

/// A page as registered in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub file_name: String,
    pub metadata: PageMetadata,
    pub text: String,
}

/// Receives navigation requests raised by clicking rendered content.
pub trait ActionListener {
    fn on_page_link_click(&mut self, page: &str);
    fn on_web_link_click(&mut self, url: &str);
}

/// A laid-out block of page content.
pub trait DrawableParagraph {
    /// On-screen bounds, including page position and scroll.
    fn absolute_body(&self) -> Rectangle;
    fn mouse_clicked(&self, x: i32, y: i32, listener: &mut dyn ActionListener);
}

/// A rendered page view. Owns its own scroll offset and layout.
pub trait DrawablePage {
    fn update_scroll_position(&mut self, visible_area: Rectangle, progress: f32);

    /// Paragraphs intersecting `visible_area`, top to bottom. Each call starts
    /// a fresh iteration.
    fn visible_paragraphs<'a>(
        &'a self,
        visible_area: Rectangle,
    ) -> Box<dyn Iterator<Item = &'a dyn DrawableParagraph> + 'a>;

    fn set_width(&mut self, width: i32);
    fn set_pos(&mut self, x: i32, y: i32);
}

/// Shared handle to a rendered page. Not `Send`.
pub type DrawablePageRef = Rc<RefCell<dyn DrawablePage>>;

/// Registry mapping page identifiers to metadata and rendered views.
///
/// Must answer for every identifier, returning a placeholder for unknown pages.
pub trait BookCatalog {
    fn get(&self, page: &str) -> PageInfo;
    fn get_drawable_page(&self, page: &str) -> DrawablePageRef;
}
