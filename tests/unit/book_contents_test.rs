//! Unit tests for the in-memory catalog and its static page layout.

use std::rc::Rc;

use guidebook::services::book_contents::{
    BookContents, Link, StaticPage, StaticParagraph, DEBUG_FILE, LINE_HEIGHT, MAIN_MENU_FILE,
    PARAGRAPH_SPACING,
};
use guidebook::types::geometry::Rectangle;
use guidebook::types::page::{ActionListener, BookCatalog, DrawablePage, DrawableParagraph};
use guidebook::types::saved_page::SavedPage;

#[derive(Default)]
struct RecordingListener {
    pages: Vec<String>,
    urls: Vec<String>,
}

impl ActionListener for RecordingListener {
    fn on_page_link_click(&mut self, page: &str) {
        self.pages.push(page.to_string());
    }

    fn on_web_link_click(&mut self, url: &str) {
        self.urls.push(url.to_string());
    }
}

/// Three one-line paragraphs, each 10px tall with 4px spacing, 100px wide.
fn three_line_page() -> StaticPage {
    let mut page = StaticPage::from_text("first\n\nsecond\n\nthird");
    page.set_width(100);
    page
}

#[test]
fn test_defaults_contain_menu_and_debug_page() {
    let contents = BookContents::with_defaults();
    assert!(contents.contains(MAIN_MENU_FILE));
    assert!(contents.contains(DEBUG_FILE));
    assert_eq!(contents.get(DEBUG_FILE).metadata.title, "Debug Page");
}

#[test]
fn test_unknown_page_resolves_to_placeholder() {
    let contents = BookContents::new();
    let info = contents.get("/nowhere.md");

    assert_eq!(info.file_name, "/nowhere.md");
    assert_eq!(info.metadata.title, "Page not found");

    let page = SavedPage::new("/nowhere.md", &contents);
    assert_eq!(page.title(), "Page not found");
}

#[test]
fn test_drawable_pages_are_cached_per_page() {
    let contents = BookContents::with_defaults();
    let a = contents.get_drawable_page(MAIN_MENU_FILE);
    let b = contents.get_drawable_page(MAIN_MENU_FILE);
    let c = contents.get_drawable_page(DEBUG_FILE);

    assert!(Rc::ptr_eq(&a, &b));
    assert!(!Rc::ptr_eq(&a, &c));
}

#[test]
fn test_insert_invalidates_cached_drawable() {
    let mut contents = BookContents::new();
    contents.insert("/a.md", "A", "one");
    let before = contents.get_drawable_page("/a.md");

    contents.insert("/a.md", "A", "one\n\ntwo");
    let after = contents.get_drawable_page("/a.md");

    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(contents.len(), 1);
}

#[test]
fn test_paragraphs_stack_vertically() {
    let page = three_line_page();
    let bodies: Vec<Rectangle> = page.paragraphs().iter().map(|p| p.absolute_body()).collect();

    assert_eq!(bodies[0], Rectangle::new(0, 0, 100, LINE_HEIGHT));
    assert_eq!(bodies[1], Rectangle::new(0, LINE_HEIGHT + PARAGRAPH_SPACING, 100, LINE_HEIGHT));
    assert_eq!(page.content_height(), 3 * LINE_HEIGHT + 2 * PARAGRAPH_SPACING);
}

#[test]
fn test_visible_paragraphs_follow_scroll() {
    let mut page = three_line_page();
    let area = Rectangle::new(0, 0, 100, 16);

    let visible: Vec<Rectangle> = page.visible_paragraphs(area).map(|p| p.absolute_body()).collect();
    assert_eq!(visible.len(), 2, "first paragraph plus the top of the second");

    page.update_scroll_position(area, 1.0);
    // content 38px, viewport 16px
    assert_eq!(page.scroll(), 22);
    let visible: Vec<Rectangle> = page.visible_paragraphs(area).map(|p| p.absolute_body()).collect();
    assert_eq!(
        visible,
        vec![
            Rectangle::new(0, -8, 100, LINE_HEIGHT),
            Rectangle::new(0, 6, 100, LINE_HEIGHT),
        ]
    );
}

#[test]
fn test_visible_paragraphs_is_restartable() {
    let page = three_line_page();
    let area = Rectangle::new(0, 0, 100, 100);
    assert_eq!(page.visible_paragraphs(area).count(), 3);
    assert_eq!(page.visible_paragraphs(area).count(), 3);
}

#[test]
fn test_scroll_clamps_when_content_fits() {
    let mut page = three_line_page();
    page.update_scroll_position(Rectangle::new(0, 0, 100, 500), 0.8);
    assert_eq!(page.scroll(), 0);
}

#[test]
fn test_set_pos_moves_paragraphs() {
    let mut page = three_line_page();
    page.set_pos(20, 30);
    let first = page.visible_paragraphs(Rectangle::new(0, 0, 500, 500)).next().map(|p| p.absolute_body());
    assert_eq!(first, Some(Rectangle::new(20, 30, 100, LINE_HEIGHT)));
}

#[test]
fn test_link_paragraphs_notify_listener() {
    let mut contents = BookContents::new();
    contents.insert("/a.md", "A", "[Next](/b.md)\n\n[Site](https://example.com)\n\nplain");
    let page = SavedPage::new("/a.md", &contents);
    let area = Rectangle::new(0, 0, 120, 200);
    page.set_drawables_position(area);

    let mut listener = RecordingListener::default();
    page.mouse_clicked(5, 5, area, &mut listener);
    page.mouse_clicked(5, LINE_HEIGHT + PARAGRAPH_SPACING + 5, area, &mut listener);
    page.mouse_clicked(5, 2 * (LINE_HEIGHT + PARAGRAPH_SPACING) + 5, area, &mut listener);

    assert_eq!(listener.pages, vec!["/b.md".to_string()]);
    assert_eq!(listener.urls, vec!["https://example.com".to_string()]);
}

#[test]
fn test_link_label_replaces_text() {
    let paragraph = StaticParagraph::new("[Back](/main_menu.md)");
    assert_eq!(paragraph.text, "Back");
    assert_eq!(paragraph.link, Some(Link::Page("/main_menu.md".to_string())));
}
