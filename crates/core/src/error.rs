//! Error types for the humanwords codec.
//!
//! All operations return structured errors rather than panicking.
//! Callers mostly branch on two broad categories: `Error::Checksum`
//! (the one failure worth a retransmission request) and everything else.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Wordlist: loading or validating a versioned word table
/// - Decode: structural or lookup failures in a token sequence
/// - Size guards: input over `max_bytes` / `max_words`
/// - Checksum: CRC32 mismatch on a decoded message
#[derive(Debug, Error)]
pub enum Error {
    /// Wordlist could not be loaded or failed its integrity checks
    #[error("wordlist error: {0}")]
    Wordlist(#[from] WordlistError),

    /// Token sequence could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Encode input exceeds the configured byte limit
    #[error("data too large: allowed {max} bytes, got {actual}")]
    InputTooLarge { max: usize, actual: usize },

    /// Decode input exceeds the configured word limit
    #[error("too many words: allowed {max}, got {actual}")]
    TooManyWords { max: usize, actual: usize },

    /// CRC32 validation failed, indicating a corrupted message
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Checksum { expected: u32, actual: u32 },
}

/// Wordlist loading and validation errors.
///
/// These indicate a bad version request or corrupted bundled data,
/// never a problem with user input. `Clone` because load results are
/// cached per version and handed out by reference.
#[derive(Debug, Clone, Error)]
pub enum WordlistError {
    /// No word table is registered for the requested version
    #[error("unsupported wordlist version: {version}")]
    UnsupportedVersion { version: u32 },

    /// Table does not contain exactly the expected number of words
    #[error("wordlist has wrong size: expected {expected} words, found {actual}")]
    WrongSize { expected: usize, actual: usize },

    /// Entry is not 3-12 lowercase ASCII letters
    #[error("invalid word {word:?} at position {position}")]
    InvalidWord { word: String, position: usize },

    /// Entry appears more than once in the table
    #[error("duplicate word {word:?} at positions {first} and {second}")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },

    /// A reserved protocol token appears as an ordinary table entry
    #[error("reserved token {word:?} appears as a table entry at position {position}")]
    ReservedEntry { word: String, position: usize },
}

/// Decoding errors for a token sequence.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Token is neither a dictionary word nor a reserved token in a
    /// valid structural position
    #[error("unknown word: {word:?}")]
    UnknownWord { word: String },

    /// Reserved token found outside its defined trailing position
    #[error("reserved token {token:?} outside its trailing position")]
    MisplacedReserved { token: &'static str },

    /// Padding marker present but there is no decoded byte to trim
    #[error("padding marker with no data to trim")]
    PaddingWithoutData,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
