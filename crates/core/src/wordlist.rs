//! Versioned word tables: the bidirectional 16-bit value <-> word mapping.
//!
//! A word table is loaded once per version from bundled data, validated,
//! and then shared read-only for the life of the process. Lookups never
//! touch a lock: the registry hands out `&'static` references.
//!
//! # Table Invariants (enforced at load)
//!
//! - Exactly 65536 entries, one per 16-bit value
//! - Every entry is 3-12 lowercase ASCII letters
//! - All entries distinct
//! - The reserved tokens `null` and `check` are never ordinary entries
//!
//! The reserved-token check is defensive: if either string were a real
//! entry, a legitimate data word could be mistaken for a structural
//! marker during decode.

use crate::error::WordlistError;
use crate::token::{CHECKSUM_WORD, PADDING_WORD};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of entries in every word table (one per 16-bit value).
pub const WORDLIST_SIZE: usize = 65536;

/// Version used when the caller does not pick one explicitly.
pub const DEFAULT_WORDLIST_VERSION: u32 = 1;

/// Minimum length of a table entry, in characters.
pub const MIN_WORD_LEN: usize = 3;

/// Maximum length of a table entry, in characters.
pub const MAX_WORD_LEN: usize = 12;

/// Bundled version-1 wordlist, one word per line, line i = value i.
const WORDLIST_V1: &str = include_str!("../wordlists/v1.txt");

static TABLE_V1: OnceLock<Result<WordTable, WordlistError>> = OnceLock::new();

/// Immutable bidirectional mapping between 16-bit values and words.
///
/// The reverse map is built once at construction so decode-side lookups
/// are O(1) rather than a scan of the forward table.
#[derive(Debug)]
pub struct WordTable {
    version: u32,
    words: Vec<&'static str>,
    index: HashMap<&'static str, u16>,
}

/// Fetch the word table for a version, loading and caching it on first use.
///
/// Tables for different versions coexist; each is constructed at most once
/// per process and returned by `&'static` reference thereafter.
///
/// # Errors
/// - `WordlistError::UnsupportedVersion` if no table is registered for `version`
/// - Any validation error from the first load of a corrupted bundled table
///   (repeated on every subsequent call for that version)
pub fn table(version: u32) -> Result<&'static WordTable, WordlistError> {
    match version {
        1 => TABLE_V1
            .get_or_init(|| WordTable::from_lines(1, WORDLIST_V1))
            .as_ref()
            .map_err(Clone::clone),
        other => Err(WordlistError::UnsupportedVersion { version: other }),
    }
}

impl WordTable {
    /// Build and validate a table from newline-separated words.
    fn from_lines(version: u32, source: &'static str) -> Result<Self, WordlistError> {
        let words: Vec<&'static str> = source.lines().collect();

        if words.len() != WORDLIST_SIZE {
            return Err(WordlistError::WrongSize {
                expected: WORDLIST_SIZE,
                actual: words.len(),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (position, &word) in words.iter().enumerate() {
            if word.len() < MIN_WORD_LEN
                || word.len() > MAX_WORD_LEN
                || !word.bytes().all(|b| b.is_ascii_lowercase())
            {
                return Err(WordlistError::InvalidWord {
                    word: word.to_string(),
                    position,
                });
            }
            if word == PADDING_WORD || word == CHECKSUM_WORD {
                return Err(WordlistError::ReservedEntry {
                    word: word.to_string(),
                    position,
                });
            }
            if let Some(first) = index.insert(word, position as u16) {
                return Err(WordlistError::DuplicateWord {
                    word: word.to_string(),
                    first: usize::from(first),
                    second: position,
                });
            }
        }

        Ok(Self {
            version,
            words,
            index,
        })
    }

    /// Version number this table was loaded for.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The word for a 16-bit value.
    ///
    /// Total over the whole `u16` domain: the size invariant guarantees an
    /// entry for every possible index.
    pub fn word_at(&self, index: u16) -> &'static str {
        self.words[usize::from(index)]
    }

    /// The 16-bit value for a word, if it is in the table.
    ///
    /// Lookup is exact and case-sensitive against the stored lowercase
    /// form; callers do not normalize, so an uppercase word is unknown.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }
}
