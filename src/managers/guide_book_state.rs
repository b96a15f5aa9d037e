//! The open guide book: current page plus an ordered list of bookmark tabs.

use log::{debug, warn};

use crate::buffer::{DataInput, DataOutput, FinalSerializable};
use crate::nbt::tag::{TAG_COMPOUND, TAG_LIST};
use crate::nbt::{Tag, TagCompound, TagList};
use crate::types::color::cycle_color_id;
use crate::types::errors::{BookmarkError, TagError};
use crate::types::page::{BookCatalog, MAIN_MENU_FILE};
use crate::types::saved_page::SavedPage;

/// Format version written into the state tag.
pub const STATE_VERSION: i32 = 1;

const KEY_VERSION: &str = "version";
const KEY_PAGE: &str = "page";
const KEY_BOOKMARKS: &str = "bookmarks";

/// Book state owned by one reader.
///
/// A bookmarked page and the current page are separate values; leaving a
/// page through [`change_page`](Self::change_page) writes its color and
/// progress back into the matching bookmark.
pub struct GuideBookState<'c> {
    catalog: &'c dyn BookCatalog,
    current_page: SavedPage,
    bookmarks: Vec<SavedPage>,
    max_bookmarks: usize,
}

impl<'c> GuideBookState<'c> {
    /// A book opened on the main menu with no bookmarks.
    pub fn new(catalog: &'c dyn BookCatalog, max_bookmarks: usize) -> Self {
        Self::opened_at(catalog, MAIN_MENU_FILE, max_bookmarks)
    }

    pub fn opened_at(catalog: &'c dyn BookCatalog, page: &str, max_bookmarks: usize) -> Self {
        Self {
            catalog,
            current_page: SavedPage::new(page, catalog),
            bookmarks: Vec::new(),
            max_bookmarks,
        }
    }

    pub fn current_page(&self) -> &SavedPage {
        &self.current_page
    }

    pub fn current_page_mut(&mut self) -> &mut SavedPage {
        &mut self.current_page
    }

    pub fn bookmarks(&self) -> &[SavedPage] {
        &self.bookmarks
    }

    pub fn max_bookmarks(&self) -> usize {
        self.max_bookmarks
    }

    pub fn is_bookmarked(&self, page: &str) -> bool {
        self.position_of(page).is_some()
    }

    fn position_of(&self, page: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.page() == page)
    }

    /// Copies the current page's color and progress into its bookmark, if any.
    fn sync_current_into_bookmark(&mut self) {
        if let Some(index) = self.position_of(self.current_page.page()) {
            let bookmark = &mut self.bookmarks[index];
            bookmark.color = self.current_page.color;
            bookmark.progress = self.current_page.progress;
        }
    }

    /// Opens `page`, restoring a bookmark's state if the page has one.
    pub fn change_page(&mut self, page: &str) {
        self.sync_current_into_bookmark();
        self.current_page = match self.position_of(page) {
            Some(index) => self.bookmarks[index].clone(),
            None => SavedPage::new(page, self.catalog),
        };
        debug!("Changed page to {}", page);
    }

    /// Bookmarks `page` and returns the color it was given. Each new bookmark
    /// takes the palette color after the previous tab's.
    pub fn add_bookmark(&mut self, page: &str) -> Result<i32, BookmarkError> {
        if self.is_bookmarked(page) {
            return Err(BookmarkError::AlreadyBookmarked(page.to_string()));
        }
        if self.bookmarks.len() >= self.max_bookmarks {
            return Err(BookmarkError::LimitReached(self.max_bookmarks));
        }

        let color = match self.bookmarks.last() {
            Some(last) => cycle_color_id(last.color.unwrap_or(0), false),
            None => 0,
        };
        let progress = if self.current_page.page() == page {
            self.current_page.color = Some(color);
            self.current_page.progress
        } else {
            0.0
        };
        self.bookmarks
            .push(SavedPage::with_state(page, Some(color), progress, self.catalog));
        Ok(color)
    }

    pub fn remove_bookmark(&mut self, page: &str) -> Result<SavedPage, BookmarkError> {
        let index = self
            .position_of(page)
            .ok_or_else(|| BookmarkError::NotFound(page.to_string()))?;
        if self.current_page.page() == page {
            self.current_page.color = None;
        }
        Ok(self.bookmarks.remove(index))
    }

    /// Cycles the highlight color of a bookmark, mirroring it on the current
    /// page when that page is open.
    pub fn cycle_bookmark_color(&mut self, page: &str, inverted: bool) -> Result<i32, BookmarkError> {
        let index = self
            .position_of(page)
            .ok_or_else(|| BookmarkError::NotFound(page.to_string()))?;
        let color = self.bookmarks[index].cycle_color(inverted);
        if self.current_page.page() == page {
            self.current_page.color = Some(color);
        }
        Ok(color)
    }

    pub fn to_tag(&self) -> Result<TagCompound, TagError> {
        let mut bookmarks = TagList::new();
        for bookmark in &self.bookmarks {
            bookmarks.push(Tag::Compound(bookmark.to_tag()))?;
        }

        let mut nbt = TagCompound::new();
        nbt.set_int(KEY_VERSION, STATE_VERSION);
        nbt.set_tag(KEY_PAGE, self.current_page.to_tag());
        nbt.set_tag(KEY_BOOKMARKS, Tag::List(bookmarks));
        Ok(nbt)
    }

    /// Rebuilds a book. Never fails: an absent tag opens a fresh book, a
    /// missing page opens the debug page, duplicate bookmarks and bookmarks
    /// beyond `max_bookmarks` are dropped.
    pub fn from_tag(nbt: Option<&TagCompound>, catalog: &'c dyn BookCatalog, max_bookmarks: usize) -> Self {
        let Some(nbt) = nbt else {
            return Self::new(catalog, max_bookmarks);
        };

        let version = nbt.get_int(KEY_VERSION);
        if version > STATE_VERSION {
            warn!("Guide book state version {} is newer than {}", version, STATE_VERSION);
        }

        let page_tag = nbt
            .has_key_of_type(KEY_PAGE, TAG_COMPOUND)
            .then(|| nbt.get_compound(KEY_PAGE));
        let current_page = SavedPage::from_tag(page_tag.as_ref(), catalog);

        let mut state = Self {
            catalog,
            current_page,
            bookmarks: Vec::new(),
            max_bookmarks,
        };

        let list = nbt.get_list(KEY_BOOKMARKS, TAG_COMPOUND);
        if nbt.has_key(KEY_BOOKMARKS) && !nbt.has_key_of_type(KEY_BOOKMARKS, TAG_LIST) {
            warn!("Ignoring malformed bookmark list");
        }
        for index in 0..list.len() {
            let bookmark = SavedPage::from_tag(Some(&list.get_compound(index)), catalog);
            if state.is_bookmarked(bookmark.page()) {
                warn!("Dropping duplicate bookmark for {}", bookmark.page());
            } else if state.bookmarks.len() >= max_bookmarks {
                warn!("Dropping bookmark for {}: limit of {} reached", bookmark.page(), max_bookmarks);
            } else {
                state.bookmarks.push(bookmark);
            }
        }
        state
    }

    pub fn from_bytes(
        input: &mut DataInput<'_>,
        catalog: &'c dyn BookCatalog,
        max_bookmarks: usize,
    ) -> Result<Self, TagError> {
        let nbt = input.read_nbt_tag_compound()?;
        Ok(Self::from_tag(nbt.as_ref(), catalog, max_bookmarks))
    }
}

impl FinalSerializable for GuideBookState<'_> {
    fn write(&self, output: &mut DataOutput) -> Result<(), TagError> {
        output.write_nbt_tag_compound(Some(&self.to_tag()?))
    }
}
