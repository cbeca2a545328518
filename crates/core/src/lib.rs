//! humanwords-core: binary data to dictionary words, and back.
//!
//! This library converts arbitrary bytes into a sequence of natural-language
//! words using a fixed, versioned 65536-word table (one word per 16-bit
//! value), and decodes such sequences back to the original bytes. Messages
//! may carry an optional CRC32 checksum frame and a padding marker for
//! odd-length input, both expressed in the same word alphabet.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `wordlist`: versioned, immutable word tables with O(1) reverse lookup
//! - `token`: the message alphabet (data words plus reserved markers)
//! - `checksum`: CRC32 frame rendering and parsing
//! - `codec`: the encode/decode pipelines and their framing rules
//! - `error`: structured error taxonomy
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable
//! - **No partial results**: any failure aborts the whole operation
//! - **Bounded work**: both directions enforce explicit size limits
//! - **Lock-free reads**: tables are immutable once loaded and shared freely
//!   across threads
//!
//! # Example
//!
//! ```
//! use humanwords_core::{decode_str, encode_to_string, DecodeOptions, EncodeOptions};
//!
//! let words = encode_to_string(b"test", &EncodeOptions::default()).unwrap();
//! assert_eq!(words, "handset interview");
//!
//! let data = decode_str(&words, &DecodeOptions::default()).unwrap();
//! assert_eq!(data, b"test");
//! ```

pub mod checksum;
pub mod codec;
pub mod error;
pub mod token;
pub mod wordlist;

// Re-export the surface most callers need
pub use codec::{
    decode, decode_str, encode, encode_to_string, DecodeOptions, EncodeOptions,
    DEFAULT_MAX_DECODE_WORDS, DEFAULT_MAX_ENCODE_BYTES,
};
pub use error::{DecodeError, Error, Result, WordlistError};
pub use wordlist::{WordTable, DEFAULT_WORDLIST_VERSION, WORDLIST_SIZE};
