//! Named Binary Tag documents.
//!
//! [`TagCompound`] is the structured intermediate form that saved pages and
//! guide book state are converted to before they reach the byte buffer.

pub mod compound;
pub mod io;
pub mod tag;

pub use compound::TagCompound;
pub use tag::{Tag, TagList};
