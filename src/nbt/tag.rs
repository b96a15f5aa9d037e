//! The NBT value model.

use super::compound::TagCompound;
use crate::types::errors::TagError;

pub const TAG_END: u8 = 0;
pub const TAG_BYTE: u8 = 1;
pub const TAG_SHORT: u8 = 2;
pub const TAG_INT: u8 = 3;
pub const TAG_LONG: u8 = 4;
pub const TAG_FLOAT: u8 = 5;
pub const TAG_DOUBLE: u8 = 6;
pub const TAG_BYTE_ARRAY: u8 = 7;
pub const TAG_STRING: u8 = 8;
pub const TAG_LIST: u8 = 9;
pub const TAG_COMPOUND: u8 = 10;
pub const TAG_INT_ARRAY: u8 = 11;
pub const TAG_LONG_ARRAY: u8 = 12;
/// Pseudo type id accepted by `has_key_of_type` meaning "any numeric tag".
pub const TAG_ANY_NUMERIC: u8 = 99;

/// A single NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(TagList),
    Compound(TagCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn type_id(&self) -> u8 {
        match self {
            Tag::Byte(_) => TAG_BYTE,
            Tag::Short(_) => TAG_SHORT,
            Tag::Int(_) => TAG_INT,
            Tag::Long(_) => TAG_LONG,
            Tag::Float(_) => TAG_FLOAT,
            Tag::Double(_) => TAG_DOUBLE,
            Tag::ByteArray(_) => TAG_BYTE_ARRAY,
            Tag::String(_) => TAG_STRING,
            Tag::List(_) => TAG_LIST,
            Tag::Compound(_) => TAG_COMPOUND,
            Tag::IntArray(_) => TAG_INT_ARRAY,
            Tag::LongArray(_) => TAG_LONG_ARRAY,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Tag::Byte(_) | Tag::Short(_) | Tag::Int(_) | Tag::Long(_) | Tag::Float(_) | Tag::Double(_)
        )
    }

    /// Numeric value widened to f64, or `None` for non-numeric tags.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric value truncated to i64, or `None` for non-numeric tags.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v.floor() as i64),
            Tag::Double(v) => Some(v.floor() as i64),
            _ => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}

impl From<f32> for Tag {
    fn from(value: f32) -> Self {
        Tag::Float(value)
    }
}

impl From<TagCompound> for Tag {
    fn from(value: TagCompound) -> Self {
        Tag::Compound(value)
    }
}

/// Homogeneous list of tags. An empty list has element type `TAG_END`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    element_type: u8,
    items: Vec<Tag>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element type id; `TAG_END` while the list is empty.
    pub fn element_type(&self) -> u8 {
        self.element_type
    }

    /// Appends a tag. The first pushed tag fixes the element type.
    pub fn push(&mut self, tag: Tag) -> Result<(), TagError> {
        let found = tag.type_id();
        if self.items.is_empty() {
            self.element_type = found;
        } else if found != self.element_type {
            return Err(TagError::ListTypeMismatch {
                expected: self.element_type,
                found,
            });
        }
        self.items.push(tag);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    /// Compound at `index`, or an empty compound if absent or of another type.
    pub fn get_compound(&self, index: usize) -> TagCompound {
        match self.items.get(index) {
            Some(Tag::Compound(c)) => c.clone(),
            _ => TagCompound::new(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds a list from tags read off the wire, where the element type is
    /// declared up front.
    pub(crate) fn from_parts(element_type: u8, items: Vec<Tag>) -> Self {
        let element_type = if items.is_empty() { TAG_END } else { element_type };
        Self { element_type, items }
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
