//! Keyed NBT document with permissive, never-failing getters.

use std::collections::BTreeMap;

use super::tag::{Tag, TagList, TAG_ANY_NUMERIC, TAG_END};

/// A keyed collection of tags.
///
/// Getters return the type's zero value when a key is missing or holds an
/// incompatible tag. Numeric getters coerce between numeric tag types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCompound {
    entries: BTreeMap<String, Tag>,
}

impl TagCompound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tag(&mut self, key: &str, tag: impl Into<Tag>) {
        self.entries.insert(key.to_string(), tag.into());
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set_tag(key, Tag::String(value.to_string()));
    }

    pub fn set_byte(&mut self, key: &str, value: i8) {
        self.set_tag(key, Tag::Byte(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set_byte(key, value as i8);
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set_tag(key, Tag::Int(value));
    }

    pub fn set_long(&mut self, key: &str, value: i64) {
        self.set_tag(key, Tag::Long(value));
    }

    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set_tag(key, Tag::Float(value));
    }

    pub fn set_double(&mut self, key: &str, value: f64) {
        self.set_tag(key, Tag::Double(value));
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True if `key` holds a tag of type `type_id`. `TAG_ANY_NUMERIC` matches
    /// every numeric tag type.
    pub fn has_key_of_type(&self, key: &str, type_id: u8) -> bool {
        match self.entries.get(key) {
            Some(tag) if type_id == TAG_ANY_NUMERIC => tag.is_numeric(),
            Some(tag) => tag.type_id() == type_id,
            None => false,
        }
    }

    pub fn get_string(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Tag::String(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn get_byte(&self, key: &str) -> i8 {
        self.integral(key) as i8
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_byte(key) != 0
    }

    pub fn get_int(&self, key: &str) -> i32 {
        self.integral(key) as i32
    }

    pub fn get_long(&self, key: &str) -> i64 {
        self.integral(key)
    }

    pub fn get_float(&self, key: &str) -> f32 {
        match self.entries.get(key) {
            Some(Tag::Float(v)) => *v,
            Some(tag) => tag.as_f64().unwrap_or(0.0) as f32,
            None => 0.0,
        }
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.entries.get(key).and_then(Tag::as_f64).unwrap_or(0.0)
    }

    pub fn get_compound(&self, key: &str) -> TagCompound {
        match self.entries.get(key) {
            Some(Tag::Compound(c)) => c.clone(),
            _ => TagCompound::new(),
        }
    }

    /// List stored at `key` if its elements are of `element_type`; an empty
    /// list otherwise. Empty lists match any element type.
    pub fn get_list(&self, key: &str, element_type: u8) -> TagList {
        match self.entries.get(key) {
            Some(Tag::List(list))
                if list.element_type() == element_type || list.element_type() == TAG_END =>
            {
                list.clone()
            }
            _ => TagList::new(),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn integral(&self, key: &str) -> i64 {
        self.entries.get(key).and_then(Tag::as_i64).unwrap_or(0)
    }
}
