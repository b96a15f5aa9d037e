use thiserror::Error;

// === TagError ===

/// Errors raised while encoding or decoding binary NBT data.
#[derive(Debug, Error, PartialEq)]
pub enum TagError {
    /// The input ended before a complete value could be read.
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },
    /// A tag type id outside the known range was encountered.
    #[error("Unknown tag type id: {0}")]
    UnknownTagType(u8),
    /// The root of a document was not a compound.
    #[error("Root tag must be a compound, found type id {0}")]
    RootNotCompound(u8),
    /// A string payload was not valid UTF-8.
    #[error("Invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(String),
    /// A string is too long for its u16 length prefix.
    #[error("String too long: {0} bytes")]
    StringTooLong(usize),
    /// A length prefix was negative.
    #[error("Negative length: {0}")]
    NegativeLength(i32),
    /// Nesting exceeded the maximum supported depth.
    #[error("Tag nesting too deep: {0}")]
    DepthLimitExceeded(usize),
    /// A tag of the wrong type was pushed into a list.
    #[error("List type mismatch: expected type id {expected}, found {found}")]
    ListTypeMismatch { expected: u8, found: u8 },
    /// The framing presence flag held an unexpected value.
    #[error("Invalid presence flag: {0}")]
    InvalidPresenceFlag(u8),
}

// === BookmarkError ===

/// Errors related to bookmark tab operations on a guide book.
#[derive(Debug, Error, PartialEq)]
pub enum BookmarkError {
    /// A bookmark for the page already exists.
    #[error("Page already bookmarked: {0}")]
    AlreadyBookmarked(String),
    /// No bookmark exists for the page.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// The bookmark list is full.
    #[error("Bookmark limit reached: {0}")]
    LimitReached(usize),
}

// === StoreError ===

/// Errors related to guide book persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("Guide book database error: {0}")]
    DatabaseError(String),
    /// Stored data could not be decoded.
    #[error("Guide book data corrupted: {0}")]
    Corrupted(#[from] TagError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShareCodeError ===

/// Errors related to decoding shared page codes.
#[derive(Debug, Error, PartialEq)]
pub enum ShareCodeError {
    /// The code is not valid base64.
    #[error("Invalid share code encoding: {0}")]
    InvalidEncoding(String),
    /// The decoded bytes are not a valid saved page buffer.
    #[error("Invalid share code payload: {0}")]
    InvalidPayload(#[from] TagError),
}
