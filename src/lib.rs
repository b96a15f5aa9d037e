//! Guidebook — saved pages, highlight colors and scroll progress for a
//! paginated guide book, with their NBT and byte-buffer wire formats.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod buffer;
pub mod database;
pub mod managers;
pub mod nbt;
pub mod platform;
pub mod services;
pub mod types;
