//! Text share codes for saved pages.
//!
//! A share code is the saved page's byte-buffer form in URL-safe base64
//! without padding, suitable for chat messages and links.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64, Engine as _};

use crate::buffer::{DataInput, FinalSerializable};
use crate::types::errors::{ShareCodeError, TagError};
use crate::types::page::BookCatalog;
use crate::types::saved_page::SavedPage;

pub fn encode(page: &SavedPage) -> Result<String, TagError> {
    Ok(BASE64.encode(page.to_bytes()?))
}

/// Decodes a share code. Surrounding whitespace is ignored.
pub fn decode(code: &str, catalog: &dyn BookCatalog) -> Result<SavedPage, ShareCodeError> {
    let bytes = BASE64
        .decode(code.trim())
        .map_err(|e| ShareCodeError::InvalidEncoding(e.to_string()))?;
    let mut input = DataInput::new(&bytes);
    Ok(SavedPage::from_bytes(&mut input, catalog)?)
}
