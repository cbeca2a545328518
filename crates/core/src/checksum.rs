//! CRC32 checksum framing.
//!
//! The checksum frame encodes the CRC32 of a message's payload as two
//! dictionary words, using the same big-endian byte pairing as the main
//! chunking loop. Encoder and decoder both go through this module, so the
//! pairing rule cannot drift between the two sides.
//!
//! The checksum always covers the original, unpadded bytes: the encoder
//! hashes its input before padding, the decoder hashes its output after
//! the padding byte has been dropped.

use crate::error::DecodeError;
use crate::wordlist::WordTable;

/// Pack two bytes into a 16-bit word index, high byte first.
///
/// This single definition is the byte-order convention for the whole
/// codec: data chunking and checksum rendering must agree on it for
/// checksums to round-trip.
pub(crate) fn pair_index(b0: u8, b1: u8) -> u16 {
    u16::from(b0) << 8 | u16::from(b1)
}

/// Render the CRC32 of `data` as two dictionary words.
pub fn checksum_words(table: &WordTable, data: &[u8]) -> (&'static str, &'static str) {
    let crc = crc32fast::hash(data).to_be_bytes();
    (
        table.word_at(pair_index(crc[0], crc[1])),
        table.word_at(pair_index(crc[2], crc[3])),
    )
}

/// Reconstruct a CRC32 value from its two-word rendering.
///
/// # Errors
/// `DecodeError::UnknownWord` if either word is not in the table.
pub fn checksum_value(table: &WordTable, word1: &str, word2: &str) -> Result<u32, DecodeError> {
    let hi = resolve(table, word1)?.to_be_bytes();
    let lo = resolve(table, word2)?.to_be_bytes();
    Ok(u32::from_be_bytes([hi[0], hi[1], lo[0], lo[1]]))
}

fn resolve(table: &WordTable, word: &str) -> Result<u16, DecodeError> {
    table.index_of(word).ok_or_else(|| DecodeError::UnknownWord {
        word: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist;

    #[test]
    fn test_pair_index_is_big_endian() {
        assert_eq!(pair_index(0x12, 0x34), 0x1234);
        assert_eq!(pair_index(0x00, 0xFF), 0x00FF);
        assert_eq!(pair_index(0xFF, 0x00), 0xFF00);
    }

    #[test]
    fn test_known_checksum_words() {
        // crc32(b"test") = 0xd87f7e0c -> pairs 0xd87f, 0x7e0c
        let table = wordlist::table(1).unwrap();
        let (w1, w2) = checksum_words(table, b"test");
        assert_eq!(w1, "laughingly");
        assert_eq!(w2, "sterility");
    }

    #[test]
    fn test_words_value_round_trip() {
        let table = wordlist::table(1).unwrap();
        for data in [&b""[..], b"a", b"test", b"some longer payload"] {
            let (w1, w2) = checksum_words(table, data);
            let value = checksum_value(table, w1, w2).unwrap();
            assert_eq!(value, crc32fast::hash(data));
        }
    }

    #[test]
    fn test_unknown_word_rejected() {
        let table = wordlist::table(1).unwrap();
        let result = checksum_value(table, "laughingly", "notaword");
        assert!(matches!(result, Err(DecodeError::UnknownWord { .. })));
    }
}
