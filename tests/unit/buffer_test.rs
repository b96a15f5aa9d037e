//! Unit tests for the DataOutput / DataInput byte-buffer codec.

use guidebook::buffer::{DataInput, DataOutput};
use guidebook::nbt::TagCompound;
use guidebook::types::errors::TagError;

#[test]
fn test_primitives_round_trip_in_order() {
    let mut out = DataOutput::new();
    out.write_byte(-5);
    out.write_boolean(true);
    out.write_short(-1234);
    out.write_int(i32::MIN);
    out.write_long(i64::MAX);
    out.write_float(-0.5);
    out.write_double(std::f64::consts::PI);
    out.write_utf("héllo").unwrap();
    out.write_byte_array(&[1, 2, 3]);
    let bytes = out.into_bytes();

    let mut input = DataInput::new(&bytes);
    assert_eq!(input.read_byte().unwrap(), -5);
    assert!(input.read_boolean().unwrap());
    assert_eq!(input.read_short().unwrap(), -1234);
    assert_eq!(input.read_int().unwrap(), i32::MIN);
    assert_eq!(input.read_long().unwrap(), i64::MAX);
    assert_eq!(input.read_float().unwrap(), -0.5);
    assert_eq!(input.read_double().unwrap(), std::f64::consts::PI);
    assert_eq!(input.read_utf().unwrap(), "héllo");
    assert_eq!(input.read_byte_array().unwrap(), vec![1, 2, 3]);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_int_is_big_endian() {
    let mut out = DataOutput::new();
    out.write_int(0x01020304);
    assert_eq!(out.as_bytes(), &[1, 2, 3, 4]);
}

#[test]
fn test_utf_length_prefix() {
    let mut out = DataOutput::new();
    out.write_utf("abc").unwrap();
    assert_eq!(out.as_bytes(), &[0, 3, b'a', b'b', b'c']);
}

#[test]
fn test_utf_too_long_is_rejected() {
    let mut out = DataOutput::new();
    let long = "x".repeat(u16::MAX as usize + 1);
    assert_eq!(out.write_utf(&long), Err(TagError::StringTooLong(long.len())));
    assert!(out.is_empty());
}

#[test]
fn test_absent_tag_is_single_zero_byte() {
    let mut out = DataOutput::new();
    out.write_nbt_tag_compound(None).unwrap();
    assert_eq!(out.as_bytes(), &[0]);

    let bytes = out.into_bytes();
    assert_eq!(DataInput::new(&bytes).read_nbt_tag_compound().unwrap(), None);
}

#[test]
fn test_present_tag_round_trip() {
    let mut tag = TagCompound::new();
    tag.set_string("page", "intro");
    tag.set_float("progress", 0.5);

    let mut out = DataOutput::new();
    out.write_nbt_tag_compound(Some(&tag)).unwrap();
    let bytes = out.into_bytes();
    assert_eq!(bytes[0], 1);

    let mut input = DataInput::new(&bytes);
    assert_eq!(input.read_nbt_tag_compound().unwrap(), Some(tag));
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_invalid_presence_flag() {
    let mut input = DataInput::new(&[7]);
    assert_eq!(input.read_nbt_tag_compound(), Err(TagError::InvalidPresenceFlag(7)));
}

#[test]
fn test_read_past_end_reports_counts() {
    let mut input = DataInput::new(&[0, 1]);
    assert_eq!(
        input.read_int(),
        Err(TagError::UnexpectedEof {
            needed: 4,
            remaining: 2
        })
    );
}

#[test]
fn test_negative_byte_array_length() {
    let mut out = DataOutput::new();
    out.write_int(-4);
    let bytes = out.into_bytes();
    assert_eq!(DataInput::new(&bytes).read_byte_array(), Err(TagError::NegativeLength(-4)));
}

#[test]
fn test_collection_round_trip() {
    let items = vec!["a".to_string(), "bc".to_string(), String::new()];
    let mut out = DataOutput::new();
    out.write_collection(&items, |out, item| out.write_utf(item)).unwrap();
    let bytes = out.into_bytes();

    let mut input = DataInput::new(&bytes);
    let read = input.read_collection(|input| input.read_utf()).unwrap();
    assert_eq!(read, items);
}

#[test]
fn test_collection_with_huge_count_fails_cleanly() {
    let mut out = DataOutput::new();
    out.write_int(i32::MAX);
    let bytes = out.into_bytes();

    let result = DataInput::new(&bytes).read_collection(|input| input.read_byte());
    assert!(matches!(result, Err(TagError::UnexpectedEof { .. })));
}
