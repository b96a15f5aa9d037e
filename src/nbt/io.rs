//! Binary named-tag encoding.
//!
//! A root document is `TAG_COMPOUND`, a u16-prefixed name (empty for roots
//! written here), then the compound payload. A compound payload is a sequence
//! of `type id, name, payload` entries closed by `TAG_END`.

use log::debug;

use super::compound::TagCompound;
use super::tag::*;
use crate::buffer::{DataInput, DataOutput};
use crate::types::errors::TagError;

/// Deepest nesting of lists/compounds accepted when reading.
pub const MAX_DEPTH: usize = 512;

pub fn write_root(out: &mut DataOutput, root: &TagCompound) -> Result<(), TagError> {
    out.write_unsigned_byte(TAG_COMPOUND);
    out.write_utf("")?;
    write_compound_payload(out, root)
}

pub fn read_root(input: &mut DataInput<'_>) -> Result<TagCompound, TagError> {
    let type_id = input.read_unsigned_byte()?;
    if type_id != TAG_COMPOUND {
        return Err(TagError::RootNotCompound(type_id));
    }
    let name = input.read_utf()?;
    if !name.is_empty() {
        debug!("Reading named root compound '{}'", name);
    }
    read_compound_payload(input, 0)
}

fn write_compound_payload(out: &mut DataOutput, compound: &TagCompound) -> Result<(), TagError> {
    for (key, tag) in compound.iter() {
        out.write_unsigned_byte(tag.type_id());
        out.write_utf(key)?;
        write_payload(out, tag)?;
    }
    out.write_unsigned_byte(TAG_END);
    Ok(())
}

fn write_payload(out: &mut DataOutput, tag: &Tag) -> Result<(), TagError> {
    match tag {
        Tag::Byte(v) => out.write_byte(*v),
        Tag::Short(v) => out.write_short(*v),
        Tag::Int(v) => out.write_int(*v),
        Tag::Long(v) => out.write_long(*v),
        Tag::Float(v) => out.write_float(*v),
        Tag::Double(v) => out.write_double(*v),
        Tag::ByteArray(values) => {
            out.write_int(values.len() as i32);
            let raw: Vec<u8> = values.iter().map(|b| *b as u8).collect();
            out.write_raw(&raw);
        }
        Tag::String(s) => out.write_utf(s)?,
        Tag::List(list) => {
            out.write_unsigned_byte(list.element_type());
            out.write_int(list.len() as i32);
            for item in list {
                write_payload(out, item)?;
            }
        }
        Tag::Compound(c) => write_compound_payload(out, c)?,
        Tag::IntArray(values) => {
            out.write_int(values.len() as i32);
            for v in values {
                out.write_int(*v);
            }
        }
        Tag::LongArray(values) => {
            out.write_int(values.len() as i32);
            for v in values {
                out.write_long(*v);
            }
        }
    }
    Ok(())
}

fn read_compound_payload(input: &mut DataInput<'_>, depth: usize) -> Result<TagCompound, TagError> {
    if depth > MAX_DEPTH {
        return Err(TagError::DepthLimitExceeded(depth));
    }
    let mut compound = TagCompound::new();
    loop {
        let type_id = input.read_unsigned_byte()?;
        if type_id == TAG_END {
            return Ok(compound);
        }
        let key = input.read_utf()?;
        let tag = read_payload(input, type_id, depth + 1)?;
        compound.set_tag(&key, tag);
    }
}

/// Checks that `count` elements of `size` bytes can still be read before
/// allocating for them.
fn ensure_available(input: &DataInput<'_>, count: usize, size: usize) -> Result<(), TagError> {
    let needed = count.saturating_mul(size);
    if needed > input.remaining() {
        return Err(TagError::UnexpectedEof {
            needed,
            remaining: input.remaining(),
        });
    }
    Ok(())
}

fn read_payload(input: &mut DataInput<'_>, type_id: u8, depth: usize) -> Result<Tag, TagError> {
    if depth > MAX_DEPTH {
        return Err(TagError::DepthLimitExceeded(depth));
    }
    let tag = match type_id {
        TAG_BYTE => Tag::Byte(input.read_byte()?),
        TAG_SHORT => Tag::Short(input.read_short()?),
        TAG_INT => Tag::Int(input.read_int()?),
        TAG_LONG => Tag::Long(input.read_long()?),
        TAG_FLOAT => Tag::Float(input.read_float()?),
        TAG_DOUBLE => Tag::Double(input.read_double()?),
        TAG_BYTE_ARRAY => {
            let len = input.read_length()?;
            let bytes = input.read_bytes(len)?;
            Tag::ByteArray(bytes.iter().map(|b| *b as i8).collect())
        }
        TAG_STRING => Tag::String(input.read_utf()?),
        TAG_LIST => {
            let element_type = input.read_unsigned_byte()?;
            let len = input.read_length()?;
            if element_type == TAG_END && len > 0 {
                return Err(TagError::UnknownTagType(TAG_END));
            }
            ensure_available(input, len, 1)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(read_payload(input, element_type, depth + 1)?);
            }
            Tag::List(TagList::from_parts(element_type, items))
        }
        TAG_COMPOUND => Tag::Compound(read_compound_payload(input, depth)?),
        TAG_INT_ARRAY => {
            let len = input.read_length()?;
            ensure_available(input, len, 4)?;
            let mut values = Vec::with_capacity(len);
            for _ in 0..len {
                values.push(input.read_int()?);
            }
            Tag::IntArray(values)
        }
        TAG_LONG_ARRAY => {
            let len = input.read_length()?;
            ensure_available(input, len, 8)?;
            let mut values = Vec::with_capacity(len);
            for _ in 0..len {
                values.push(input.read_long()?);
            }
            Tag::LongArray(values)
        }
        other => return Err(TagError::UnknownTagType(other)),
    };
    Ok(tag)
}
