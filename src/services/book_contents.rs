//! In-memory page catalog.
//!
//! Pages are plain text split into paragraphs on blank lines. A paragraph that
//! is exactly a markdown link (`[label](target)`) becomes clickable: targets
//! starting with `http://` or `https://` are web links, anything else a page
//! link. Layout is a fixed-metric vertical stack; real text shaping belongs to
//! the embedding renderer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};

use crate::types::geometry::Rectangle;
use crate::types::page::{
    ActionListener, BookCatalog, DrawablePage, DrawablePageRef, DrawableParagraph, PageInfo, PageMetadata,
};

pub use crate::types::page::{DEBUG_FILE, MAIN_MENU_FILE};

pub const LINE_HEIGHT: i32 = 10;
pub const CHAR_WIDTH: i32 = 6;
pub const PARAGRAPH_SPACING: i32 = 4;

/// Catalog backed by a map of registered pages. Rendered views are built on
/// first request and cached per page.
#[derive(Default)]
pub struct BookContents {
    pages: HashMap<String, PageInfo>,
    drawables: RefCell<HashMap<String, DrawablePageRef>>,
}

impl BookContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the main menu and the debug page.
    pub fn with_defaults() -> Self {
        let mut contents = Self::new();
        contents.insert(
            MAIN_MENU_FILE,
            "Main Menu",
            "Welcome to the guide book.\n\n[Debug page](/debug/debug_page.md)",
        );
        contents.insert(
            DEBUG_FILE,
            "Debug Page",
            "This page is shown when no saved page could be restored.\n\n[Back to the menu](/main_menu.md)",
        );
        contents
    }

    /// Registers or replaces a page. Drops any cached view of it.
    pub fn insert(&mut self, file_name: &str, title: &str, text: &str) {
        self.pages.insert(
            file_name.to_string(),
            PageInfo {
                file_name: file_name.to_string(),
                metadata: PageMetadata {
                    title: title.to_string(),
                    icon: None,
                },
                text: text.to_string(),
            },
        );
        self.drawables.borrow_mut().remove(file_name);
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.pages.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn not_found(file_name: &str) -> PageInfo {
        PageInfo {
            file_name: file_name.to_string(),
            metadata: PageMetadata {
                title: "Page not found".to_string(),
                icon: None,
            },
            text: format!("The page {} could not be found.", file_name),
        }
    }
}

impl BookCatalog for BookContents {
    fn get(&self, page: &str) -> PageInfo {
        match self.pages.get(page) {
            Some(info) => info.clone(),
            None => {
                warn!("Requested unknown page {:?}", page);
                Self::not_found(page)
            }
        }
    }

    fn get_drawable_page(&self, page: &str) -> DrawablePageRef {
        if let Some(existing) = self.drawables.borrow().get(page) {
            return Rc::clone(existing);
        }
        debug!("Building drawable page for {:?}", page);
        let drawable: DrawablePageRef = Rc::new(RefCell::new(StaticPage::from_text(&self.get(page).text)));
        self.drawables
            .borrow_mut()
            .insert(page.to_string(), Rc::clone(&drawable));
        drawable
    }
}

/// Click target of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Link {
    Page(String),
    Web(String),
}

impl Link {
    /// Parses a paragraph consisting solely of `[label](target)`.
    fn parse(text: &str) -> Option<(String, Link)> {
        let rest = text.trim().strip_prefix('[')?;
        let (label, rest) = rest.split_once("](")?;
        let target = rest.strip_suffix(')')?;
        if target.is_empty() || target.contains(char::is_whitespace) {
            return None;
        }
        let link = if target.starts_with("http://") || target.starts_with("https://") {
            Link::Web(target.to_string())
        } else {
            Link::Page(target.to_string())
        };
        Some((label.to_string(), link))
    }
}

/// One laid-out paragraph of a [`StaticPage`].
#[derive(Debug, Clone)]
pub struct StaticParagraph {
    pub text: String,
    pub link: Option<Link>,
    relative_body: Rectangle,
    absolute_body: Rectangle,
}

impl StaticParagraph {
    pub fn new(text: &str) -> Self {
        let (text, link) = match Link::parse(text) {
            Some((label, link)) => (label, Some(link)),
            None => (text.trim().to_string(), None),
        };
        Self {
            text,
            link,
            relative_body: Rectangle::default(),
            absolute_body: Rectangle::default(),
        }
    }

    /// Height needed to wrap the text into `width` pixels.
    fn height_for(&self, width: i32) -> i32 {
        let chars_per_line = (width / CHAR_WIDTH).max(1) as usize;
        let lines = self.text.chars().count().div_ceil(chars_per_line).max(1);
        lines as i32 * LINE_HEIGHT
    }
}

impl DrawableParagraph for StaticParagraph {
    fn absolute_body(&self) -> Rectangle {
        self.absolute_body
    }

    fn mouse_clicked(&self, _x: i32, _y: i32, listener: &mut dyn ActionListener) {
        match &self.link {
            Some(Link::Page(page)) => listener.on_page_link_click(page),
            Some(Link::Web(url)) => listener.on_web_link_click(url),
            None => {}
        }
    }
}

/// Fixed-metric page view: paragraphs stacked top to bottom.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    x: i32,
    y: i32,
    width: i32,
    scroll: i32,
    paragraphs: Vec<StaticParagraph>,
}

impl StaticPage {
    pub fn from_text(text: &str) -> Self {
        let paragraphs = text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .map(StaticParagraph::new)
            .collect();
        Self::from_paragraphs(paragraphs)
    }

    pub fn from_paragraphs(paragraphs: Vec<StaticParagraph>) -> Self {
        let mut page = Self {
            paragraphs,
            ..Self::default()
        };
        page.relayout();
        page
    }

    pub fn paragraphs(&self) -> &[StaticParagraph] {
        &self.paragraphs
    }

    /// Current scroll offset in pixels.
    pub fn scroll(&self) -> i32 {
        self.scroll
    }

    pub fn content_height(&self) -> i32 {
        self.paragraphs
            .last()
            .map(|p| p.relative_body.y1())
            .unwrap_or(0)
    }

    fn relayout(&mut self) {
        let mut offset = 0;
        for paragraph in &mut self.paragraphs {
            let height = paragraph.height_for(self.width);
            paragraph.relative_body = Rectangle::new(0, offset, self.width, height);
            offset += height + PARAGRAPH_SPACING;
        }
        self.reposition();
    }

    fn reposition(&mut self) {
        let (dx, dy) = (self.x, self.y - self.scroll);
        for paragraph in &mut self.paragraphs {
            paragraph.absolute_body = paragraph.relative_body.translated(dx, dy);
        }
    }
}

impl DrawablePage for StaticPage {
    fn update_scroll_position(&mut self, visible_area: Rectangle, progress: f32) {
        let max_scroll = (self.content_height() - visible_area.height).max(0);
        self.scroll = (progress * max_scroll as f32).round() as i32;
        self.reposition();
    }

    fn visible_paragraphs<'a>(
        &'a self,
        visible_area: Rectangle,
    ) -> Box<dyn Iterator<Item = &'a dyn DrawableParagraph> + 'a> {
        Box::new(
            self.paragraphs
                .iter()
                .filter(move |p| p.absolute_body.intersects(&visible_area))
                .map(|p| p as &dyn DrawableParagraph),
        )
    }

    fn set_width(&mut self, width: i32) {
        if self.width != width {
            self.width = width;
            self.relayout();
        }
    }

    fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.reposition();
    }
}
