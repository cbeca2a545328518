//! Encoding and decoding between bytes and word sequences.
//!
//! # Message Format
//!
//! ```text
//! word word word ... [null] [check word word]
//! ```
//!
//! - Each data word encodes one big-endian 2-byte chunk of the input.
//! - A trailing `null` marks that the input had odd length and one zero
//!   byte of padding was added to complete the final chunk.
//! - A trailing `check` plus two words is the CRC32 frame, covering the
//!   original unpadded bytes.
//!
//! The decoder strips the checksum frame first, then the padding marker;
//! reversing that order would misread a padded, checksummed message.
//!
//! # Size Guards
//!
//! Both directions are bounded up front (`max_bytes` / `max_words`) so no
//! partial work happens on oversized input. The defaults follow the wire
//! protocol: 10 KiB of data, 1024 words.

use crate::checksum::{self, pair_index};
use crate::error::{DecodeError, Error, Result};
use crate::token::{Token, CHECKSUM_WORD, PADDING_WORD};
use crate::wordlist::{self, DEFAULT_WORDLIST_VERSION};

/// Default encode size limit, in input bytes.
pub const DEFAULT_MAX_ENCODE_BYTES: usize = 10240;

/// Default decode size limit, in tokens.
pub const DEFAULT_MAX_DECODE_WORDS: usize = 1024;

/// A checksum frame is the `check` marker plus two checksum words.
const CHECKSUM_FRAME_WORDS: usize = 3;

/// Options for [`encode`].
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Wordlist version to encode with
    pub version: u32,
    /// Whether to append a CRC32 checksum frame
    pub checksum: bool,
    /// Maximum accepted input size in bytes
    pub max_bytes: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_WORDLIST_VERSION,
            checksum: false,
            max_bytes: DEFAULT_MAX_ENCODE_BYTES,
        }
    }
}

/// Options for [`decode`] and [`decode_str`].
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Wordlist version to decode with
    pub version: u32,
    /// Maximum accepted input size in tokens
    pub max_words: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_WORDLIST_VERSION,
            max_words: DEFAULT_MAX_DECODE_WORDS,
        }
    }
}

/// Encode binary data as a sequence of dictionary words.
///
/// Odd-length input is padded with a single zero byte to fill the last
/// chunk and the padding marker is appended; with `opts.checksum` set,
/// the CRC32 frame (computed over the unpadded input) follows.
///
/// The returned words borrow from the bundled table, so the sequence is
/// cheap to build and trivially rendered with [`encode_to_string`].
///
/// # Errors
/// - `Error::InputTooLarge` if `data` exceeds `opts.max_bytes`
/// - `Error::Wordlist` if the requested version cannot be loaded
pub fn encode(data: &[u8], opts: &EncodeOptions) -> Result<Vec<&'static str>> {
    if data.len() > opts.max_bytes {
        return Err(Error::InputTooLarge {
            max: opts.max_bytes,
            actual: data.len(),
        });
    }
    let table = wordlist::table(opts.version)?;

    let mut words = Vec::with_capacity(data.len() / 2 + 1 + CHECKSUM_FRAME_WORDS);
    let mut chunks = data.chunks_exact(2);
    for chunk in &mut chunks {
        words.push(table.word_at(pair_index(chunk[0], chunk[1])));
    }
    let padded = if let [last] = chunks.remainder() {
        words.push(table.word_at(pair_index(*last, 0)));
        true
    } else {
        false
    };
    if padded {
        words.push(PADDING_WORD);
    }

    if opts.checksum {
        let (w1, w2) = checksum::checksum_words(table, data);
        words.push(CHECKSUM_WORD);
        words.push(w1);
        words.push(w2);
    }

    Ok(words)
}

/// Encode binary data and render it as a single space-joined string.
pub fn encode_to_string(data: &[u8], opts: &EncodeOptions) -> Result<String> {
    Ok(encode(data, opts)?.join(" "))
}

/// Decode a sequence of words back into bytes.
///
/// Frame stripping runs in a fixed order: the checksum frame (when the
/// sequence is longer than a bare frame and the third-from-last token is
/// `check`) is removed first, then a trailing padding marker. Remaining
/// tokens must all be dictionary words; each contributes its index as two
/// big-endian bytes. If a checksum frame was present it is validated
/// against the final unpadded output.
///
/// Every failure aborts the whole call; partial data is never returned.
///
/// # Errors
/// - `Error::TooManyWords` if the input exceeds `opts.max_words`
/// - `Error::Wordlist` if the requested version cannot be loaded
/// - `Error::Decode` for unknown words, misplaced reserved tokens, or a
///   padding marker with nothing to trim
/// - `Error::Checksum` if the checksum frame does not match the payload
pub fn decode<S: AsRef<str>>(words: &[S], opts: &DecodeOptions) -> Result<Vec<u8>> {
    if words.len() > opts.max_words {
        return Err(Error::TooManyWords {
            max: opts.max_words,
            actual: words.len(),
        });
    }
    let table = wordlist::table(opts.version)?;

    let mut tokens: Vec<Token<'_>> = words.iter().map(|w| Token::parse(w.as_ref())).collect();

    // Checksum frame detection must precede padding detection: in a
    // padded, checksummed message the padding marker sits inside the
    // sequence, three tokens from the end.
    let frame = if tokens.len() > CHECKSUM_FRAME_WORDS
        && tokens[tokens.len() - CHECKSUM_FRAME_WORDS] == Token::Check
    {
        let word1 = data_word(tokens[tokens.len() - 2])?;
        let word2 = data_word(tokens[tokens.len() - 1])?;
        tokens.truncate(tokens.len() - CHECKSUM_FRAME_WORDS);
        Some((word1, word2))
    } else {
        None
    };

    let padded = if tokens.last() == Some(&Token::Null) {
        tokens.pop();
        true
    } else {
        false
    };

    let mut output = Vec::with_capacity(tokens.len() * 2);
    for token in &tokens {
        let index = match token {
            Token::Word(word) => {
                table
                    .index_of(word)
                    .ok_or_else(|| DecodeError::UnknownWord {
                        word: (*word).to_string(),
                    })?
            }
            Token::Null => return Err(DecodeError::MisplacedReserved { token: PADDING_WORD }.into()),
            Token::Check => {
                return Err(DecodeError::MisplacedReserved {
                    token: CHECKSUM_WORD,
                }
                .into())
            }
        };
        output.extend_from_slice(&index.to_be_bytes());
    }

    if padded && output.pop().is_none() {
        return Err(DecodeError::PaddingWithoutData.into());
    }

    if let Some((word1, word2)) = frame {
        let expected = checksum::checksum_value(table, word1, word2)?;
        let actual = crc32fast::hash(&output);
        if expected != actual {
            return Err(Error::Checksum { expected, actual });
        }
    }

    Ok(output)
}

/// Decode a whitespace-delimited word string back into bytes.
///
/// Accepts the space-joined rendering of [`encode_to_string`]; any run of
/// whitespace separates tokens.
pub fn decode_str(words: &str, opts: &DecodeOptions) -> Result<Vec<u8>> {
    decode(&words.split_whitespace().collect::<Vec<_>>(), opts)
}

/// A checksum-frame slot must hold a data word, not a reserved token.
fn data_word(token: Token<'_>) -> Result<&str> {
    match token {
        Token::Word(word) => Ok(word),
        Token::Null => Err(DecodeError::MisplacedReserved { token: PADDING_WORD }.into()),
        Token::Check => Err(DecodeError::MisplacedReserved {
            token: CHECKSUM_WORD,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum_opts() -> EncodeOptions {
        EncodeOptions {
            checksum: true,
            ..EncodeOptions::default()
        }
    }

    #[test]
    fn test_encode_known_vector() {
        let words = encode(b"test", &EncodeOptions::default()).unwrap();
        assert_eq!(words, vec!["handset", "interview"]);
    }

    #[test]
    fn test_encode_known_vector_with_checksum() {
        let words = encode(b"test", &checksum_opts()).unwrap();
        assert_eq!(
            words,
            vec!["handset", "interview", "check", "laughingly", "sterility"]
        );
    }

    #[test]
    fn test_encode_to_string() {
        let rendered = encode_to_string(b"test", &EncodeOptions::default()).unwrap();
        assert_eq!(rendered, "handset interview");
    }

    #[test]
    fn test_decode_known_vector() {
        let data = decode(&["handset", "interview"], &DecodeOptions::default()).unwrap();
        assert_eq!(data, b"test");
    }

    #[test]
    fn test_decode_validates_checksum() {
        let data = decode(
            &["handset", "interview", "check", "laughingly", "sterility"],
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(data, b"test");
    }

    #[test]
    fn test_decode_wrong_checksum_word() {
        // "broken" is a real dictionary word, so this must surface as a
        // checksum mismatch rather than an unknown word
        let result = decode(
            &["handset", "interview", "check", "laughingly", "broken"],
            &DecodeOptions::default(),
        );
        assert!(matches!(result, Err(Error::Checksum { .. })));
    }

    #[test]
    fn test_decode_tampered_data_word() {
        let mut words = encode(b"some payload", &checksum_opts()).unwrap();
        words[0] = "broken";
        let result = decode(&words, &DecodeOptions::default());
        assert!(matches!(result, Err(Error::Checksum { .. })));
    }

    #[test]
    fn test_empty_input() {
        assert!(encode(b"", &EncodeOptions::default()).unwrap().is_empty());
        let empty: [&str; 0] = [];
        assert_eq!(decode(&empty, &DecodeOptions::default()).unwrap(), b"");
    }

    #[test]
    fn test_odd_length_padding() {
        let words = encode(b"\x01", &EncodeOptions::default()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], "null");
        assert_eq!(decode(&words, &DecodeOptions::default()).unwrap(), b"\x01");
    }

    #[test]
    fn test_padding_emitted_iff_odd() {
        for len in 0..9 {
            let data = vec![0xAB; len];
            let words = encode(&data, &EncodeOptions::default()).unwrap();
            let has_null = words.last() == Some(&"null");
            assert_eq!(has_null, len % 2 == 1, "len {len}");
            assert_eq!(decode(&words, &DecodeOptions::default()).unwrap(), data);
        }
    }

    #[test]
    fn test_two_byte_checksum_frame_detected() {
        // Four tokens total: one data word plus the frame. The frame must
        // still be recognized.
        let words = encode(b"ab", &checksum_opts()).unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(decode(&words, &DecodeOptions::default()).unwrap(), b"ab");
    }

    #[test]
    fn test_padded_checksum_round_trip() {
        let words = encode(b"odd", &checksum_opts()).unwrap();
        // data data null check w1 w2
        assert_eq!(words[2], "null");
        assert_eq!(words[3], "check");
        assert_eq!(decode(&words, &DecodeOptions::default()).unwrap(), b"odd");
    }

    #[test]
    fn test_encode_max_bytes() {
        let opts = EncodeOptions {
            max_bytes: 3,
            ..EncodeOptions::default()
        };
        let result = encode(b"test", &opts);
        assert!(matches!(
            result,
            Err(Error::InputTooLarge { max: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_decode_max_words() {
        let opts = DecodeOptions {
            max_words: 1,
            ..DecodeOptions::default()
        };
        let result = decode(&["handset", "interview"], &opts);
        assert!(matches!(
            result,
            Err(Error::TooManyWords { max: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_unknown_word() {
        let result = decode(&["handset", "zzzzzz"], &DecodeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::UnknownWord { .. }))
        ));
    }

    #[test]
    fn test_uppercase_word_is_unknown() {
        let result = decode(&["Handset", "interview"], &DecodeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::UnknownWord { .. }))
        ));
    }

    #[test]
    fn test_misplaced_null() {
        let result = decode(&["null", "handset"], &DecodeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::MisplacedReserved { token: "null" }))
        ));
    }

    #[test]
    fn test_lone_check_is_not_a_frame() {
        // Three tokens are exactly a bare frame; detection requires data
        let result = decode(&["check", "handset", "interview"], &DecodeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::MisplacedReserved {
                token: "check"
            }))
        ));
    }

    #[test]
    fn test_padding_without_data() {
        let result = decode(&["null"], &DecodeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::PaddingWithoutData))
        ));
    }

    #[test]
    fn test_reserved_token_in_checksum_slot() {
        let result = decode(
            &["handset", "interview", "check", "null", "broken"],
            &DecodeOptions::default(),
        );
        assert!(matches!(
            result,
            Err(Error::Decode(DecodeError::MisplacedReserved { token: "null" }))
        ));
    }

    #[test]
    fn test_decode_str_splits_whitespace() {
        let data = decode_str("handset interview", &DecodeOptions::default()).unwrap();
        assert_eq!(data, b"test");
        let data = decode_str("  handset\n interview\t", &DecodeOptions::default()).unwrap();
        assert_eq!(data, b"test");
    }

    #[test]
    fn test_unsupported_version() {
        let opts = EncodeOptions {
            version: 9,
            ..EncodeOptions::default()
        };
        assert!(matches!(
            encode(b"test", &opts),
            Err(Error::Wordlist(
                crate::error::WordlistError::UnsupportedVersion { version: 9 }
            ))
        ));
    }
}
