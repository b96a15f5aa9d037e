//! A bookmark on a guide book page.

use std::fmt;

use log::debug;

use super::color::cycle_color_id;
use super::geometry::Rectangle;
use super::page::{ActionListener, BookCatalog, DrawablePageRef, PageInfo, DEBUG_FILE};
use crate::buffer::{DataInput, DataOutput, FinalSerializable};
use crate::nbt::TagCompound;
use crate::types::errors::TagError;

const KEY_PAGE: &str = "page";
const KEY_COLOR: &str = "color";
const KEY_PROGRESS: &str = "progress";

/// A visited page with its highlight color and scroll progress.
///
/// Page metadata and the rendered view are resolved from the catalog once, at
/// construction, and are not part of the serialized form.
#[derive(Clone)]
pub struct SavedPage {
    page: String,
    /// Highlight color id; `None` means no color assigned.
    pub color: Option<i32>,
    /// Scroll progress, nominally in `[0.0, 1.0]`. Not clamped here.
    pub progress: f32,
    page_info: PageInfo,
    drawable_page: DrawablePageRef,
}

impl SavedPage {
    /// Creates an uncolored saved page scrolled to the top.
    pub fn new(page: &str, catalog: &dyn BookCatalog) -> Self {
        Self::with_state(page, None, 0.0, catalog)
    }

    pub fn with_state(page: &str, color: Option<i32>, progress: f32, catalog: &dyn BookCatalog) -> Self {
        Self {
            page: page.to_string(),
            color,
            progress,
            page_info: catalog.get(page),
            drawable_page: catalog.get_drawable_page(page),
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn title(&self) -> &str {
        &self.page_info.metadata.title
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn drawable_page(&self) -> &DrawablePageRef {
        &self.drawable_page
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub fn update_scroll_position(&self, visible_area: Rectangle) {
        self.drawable_page
            .borrow_mut()
            .update_scroll_position(visible_area, self.progress);
    }

    /// Forwards a click to the first visible paragraph containing the point.
    pub fn mouse_clicked(&self, mouse_x: i32, mouse_y: i32, visible_area: Rectangle, listener: &mut dyn ActionListener) {
        let page = self.drawable_page.borrow();
        let hit = page
            .visible_paragraphs(visible_area)
            .find(|paragraph| paragraph.absolute_body().contains(mouse_x, mouse_y));
        if let Some(paragraph) = hit {
            paragraph.mouse_clicked(mouse_x, mouse_y, listener);
        }
    }

    pub fn set_drawables_position(&self, area: Rectangle) {
        let mut page = self.drawable_page.borrow_mut();
        page.set_width(area.width);
        page.set_pos(area.x0, area.y0);
    }

    /// Moves to the next palette color (previous if `inverted`), treating an
    /// absent color as id 0. Returns the stored id.
    pub fn cycle_color(&mut self, inverted: bool) -> i32 {
        let next = cycle_color_id(self.color.unwrap_or(0), inverted);
        self.color = Some(next);
        next
    }

    /// Identity comparison on the page only.
    pub fn page_equals(&self, other: &SavedPage) -> bool {
        self.page == other.page
    }

    pub fn to_tag(&self) -> TagCompound {
        let mut nbt = TagCompound::new();
        nbt.set_string(KEY_PAGE, &self.page);
        if let Some(color) = self.color {
            nbt.set_int(KEY_COLOR, color);
        }
        nbt.set_float(KEY_PROGRESS, self.progress);
        nbt
    }

    /// Rebuilds a saved page. Never fails: an absent tag opens the debug page,
    /// missing keys take the tag format's zero values.
    pub fn from_tag(nbt: Option<&TagCompound>, catalog: &dyn BookCatalog) -> Self {
        match nbt {
            Some(nbt) => Self::with_state(
                &nbt.get_string(KEY_PAGE),
                nbt.has_key(KEY_COLOR).then(|| nbt.get_int(KEY_COLOR)),
                nbt.get_float(KEY_PROGRESS),
                catalog,
            ),
            None => {
                debug!("No saved page data, opening {}", DEBUG_FILE);
                Self::new(DEBUG_FILE, catalog)
            }
        }
    }

    /// Reads one framed tag from `input`. Only a structurally broken buffer
    /// is an error.
    pub fn from_bytes(input: &mut DataInput<'_>, catalog: &dyn BookCatalog) -> Result<Self, TagError> {
        let nbt = input.read_nbt_tag_compound()?;
        Ok(Self::from_tag(nbt.as_ref(), catalog))
    }
}

impl FinalSerializable for SavedPage {
    fn write(&self, output: &mut DataOutput) -> Result<(), TagError> {
        output.write_nbt_tag_compound(Some(&self.to_tag()))
    }
}

impl fmt::Debug for SavedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedPage")
            .field("page", &self.page)
            .field("color", &self.color)
            .field("progress", &self.progress)
            .field("title", &self.title())
            .finish()
    }
}
