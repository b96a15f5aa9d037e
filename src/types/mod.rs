// Guidebook shared type definitions
// Each submodule defines types used across the crate.

pub mod color;
pub mod errors;
pub mod geometry;
pub mod page;
pub mod saved_page;
pub mod settings;
