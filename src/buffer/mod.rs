//! Byte-buffer codec.
//!
//! A flat big-endian framing used for network transfer and storage. Structured
//! data crosses this boundary as a single NBT document behind a presence flag:
//!
//! ```
//! use guidebook::buffer::{DataInput, DataOutput};
//! use guidebook::nbt::TagCompound;
//!
//! let mut tag = TagCompound::new();
//! tag.set_string("page", "intro");
//!
//! let mut out = DataOutput::new();
//! out.write_nbt_tag_compound(Some(&tag)).unwrap();
//!
//! let bytes = out.into_bytes();
//! let mut input = DataInput::new(&bytes);
//! assert_eq!(input.read_nbt_tag_compound().unwrap(), Some(tag));
//! ```

pub mod data_input;
pub mod data_output;

pub use data_input::DataInput;
pub use data_output::DataOutput;

use crate::types::errors::TagError;

/// Types that can be written to a [`DataOutput`] as a final (non-polymorphic)
/// value. Reading back is a per-type associated function.
pub trait FinalSerializable {
    fn write(&self, output: &mut DataOutput) -> Result<(), TagError>;

    /// Convenience: writes `self` into a fresh buffer and returns its bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, TagError> {
        let mut output = DataOutput::new();
        self.write(&mut output)?;
        Ok(output.into_bytes())
    }
}
