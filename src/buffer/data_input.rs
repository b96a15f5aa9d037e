//! Big-endian byte source over a borrowed slice.

use crate::nbt::{self, TagCompound};
use crate::types::errors::TagError;

/// Cursor reading big-endian values from a byte slice.
#[derive(Debug, Clone)]
pub struct DataInput<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DataInput<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], TagError> {
        if len > self.remaining() {
            return Err(TagError::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TagError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_byte(&mut self) -> Result<i8, TagError> {
        Ok(self.read_unsigned_byte()? as i8)
    }

    pub fn read_unsigned_byte(&mut self) -> Result<u8, TagError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_boolean(&mut self) -> Result<bool, TagError> {
        Ok(self.read_unsigned_byte()? != 0)
    }

    pub fn read_short(&mut self) -> Result<i16, TagError> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    pub fn read_unsigned_short(&mut self) -> Result<u16, TagError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_int(&mut self) -> Result<i32, TagError> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_long(&mut self) -> Result<i64, TagError> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    pub fn read_float(&mut self) -> Result<f32, TagError> {
        Ok(f32::from_bits(u32::from_be_bytes(self.read_array()?)))
    }

    pub fn read_double(&mut self) -> Result<f64, TagError> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
    }

    pub fn read_utf(&mut self) -> Result<String, TagError> {
        let len = self.read_unsigned_short()? as usize;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| TagError::InvalidUtf8(e.to_string()))
    }

    /// Reads an i32 length, rejecting negative values.
    pub fn read_length(&mut self) -> Result<usize, TagError> {
        let len = self.read_int()?;
        usize::try_from(len).map_err(|_| TagError::NegativeLength(len))
    }

    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, TagError> {
        let len = self.read_length()?;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Reads a presence flag and, when set, one root document.
    pub fn read_nbt_tag_compound(&mut self) -> Result<Option<TagCompound>, TagError> {
        match self.read_unsigned_byte()? {
            0 => Ok(None),
            1 => nbt::io::read_root(self).map(Some),
            other => Err(TagError::InvalidPresenceFlag(other)),
        }
    }

    /// Reads an i32 element count then each element with `read_element`.
    pub fn read_collection<T, F>(&mut self, mut read_element: F) -> Result<Vec<T>, TagError>
    where
        F: FnMut(&mut DataInput<'a>) -> Result<T, TagError>,
    {
        let count = self.read_length()?;
        // every element occupies at least one byte
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(read_element(self)?);
        }
        Ok(items)
    }
}
