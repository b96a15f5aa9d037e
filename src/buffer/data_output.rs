//! Big-endian byte sink.

use crate::nbt::{self, TagCompound};
use crate::types::errors::TagError;

/// Growable big-endian output buffer.
#[derive(Debug, Default, Clone)]
pub struct DataOutput {
    buf: Vec<u8>,
}

impl DataOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_byte(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    pub fn write_unsigned_byte(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_boolean(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    pub fn write_short(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_unsigned_short(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_int(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_long(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_float(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    pub fn write_double(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Writes a u16 length prefix followed by the UTF-8 bytes.
    pub fn write_utf(&mut self, value: &str) -> Result<(), TagError> {
        let len = u16::try_from(value.len()).map_err(|_| TagError::StringTooLong(value.len()))?;
        self.write_unsigned_short(len);
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Writes an i32 length prefix followed by the raw bytes.
    pub fn write_byte_array(&mut self, value: &[u8]) {
        self.write_int(value.len() as i32);
        self.buf.extend_from_slice(value);
    }

    /// Writes a presence flag followed by the root document when present.
    pub fn write_nbt_tag_compound(&mut self, tag: Option<&TagCompound>) -> Result<(), TagError> {
        match tag {
            None => {
                self.write_boolean(false);
                Ok(())
            }
            Some(tag) => {
                self.write_boolean(true);
                nbt::io::write_root(self, tag)
            }
        }
    }

    /// Writes an i32 element count then each element with `write_element`.
    pub fn write_collection<T, F>(&mut self, items: &[T], mut write_element: F) -> Result<(), TagError>
    where
        F: FnMut(&mut DataOutput, &T) -> Result<(), TagError>,
    {
        self.write_int(items.len() as i32);
        for item in items {
            write_element(self, item)?;
        }
        Ok(())
    }

    pub(crate) fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
