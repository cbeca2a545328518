//! Token alphabet for encoded messages.
//!
//! An encoded message is a sequence of tokens: dictionary words plus two
//! reserved structural markers. Modelling the markers as explicit variants
//! keeps the decoder's frame-stripping logic an ordered state transition
//! instead of scattered string comparisons.
//!
//! # Framing Rules
//!
//! A well-formed message has at most one trailing checksum frame
//! (`check` followed by exactly two data words) and, once that frame is
//! removed, at most one trailing `null` padding marker. Reserved tokens
//! anywhere else are structural errors.

/// Reserved token marking a padded (odd-length) input.
pub const PADDING_WORD: &str = "null";

/// Reserved token introducing the two-word checksum frame.
pub const CHECKSUM_WORD: &str = "check";

/// A single token of an encoded message.
///
/// `Word` carries the raw string; whether it is actually a dictionary
/// word is only known once it is resolved against a [`crate::wordlist::WordTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Candidate dictionary word
    Word(&'a str),
    /// Padding marker (`null`)
    Null,
    /// Checksum frame marker (`check`)
    Check,
}

impl<'a> Token<'a> {
    /// Classify a raw token string.
    ///
    /// Matching is exact: `"NULL"` or `"Check"` are ordinary (and almost
    /// certainly unknown) words, not markers.
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            PADDING_WORD => Token::Null,
            CHECKSUM_WORD => Token::Check,
            other => Token::Word(other),
        }
    }

    /// The wire representation of this token.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(w) => w,
            Token::Null => PADDING_WORD,
            Token::Check => CHECKSUM_WORD,
        }
    }
}
