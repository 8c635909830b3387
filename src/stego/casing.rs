// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Letter-case embedding channel.
//!
//! Each ASCII letter of the carrier carries one bit: uppercase = 1,
//! lowercase = 0. Bits are written in reading order starting at the first
//! letter. Everything that is not an ASCII letter (digits, punctuation,
//! whitespace, non-Latin text) is copied through and carries nothing.
//! Letters after the last payload bit keep their original case.

use crate::stego::capacity::{carrier_capacity, required_bits};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, bits_to_bytes, bytes_to_bits};

/// Whether `c` carries a bit.
#[inline]
pub fn is_carrier_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Write `bits` into the casing of `carrier`.
///
/// # Errors
/// [`StegoError::CarrierTooShort`] if the carrier has fewer letters than
/// `bits.len()`. Nothing is embedded in that case.
pub fn embed_bits(bits: &[u8], carrier: &str) -> Result<String, StegoError> {
    let available = carrier_capacity(carrier);
    if available < bits.len() {
        return Err(StegoError::CarrierTooShort {
            needed: bits.len(),
            available,
        });
    }

    let mut bits = bits.iter().copied();
    Ok(carrier
        .chars()
        .map(|c| {
            if !is_carrier_letter(c) {
                return c;
            }
            match bits.next() {
                Some(1) => c.to_ascii_uppercase(),
                Some(_) => c.to_ascii_lowercase(),
                None => c,
            }
        })
        .collect())
}

/// Read one bit per letter of `stego`, in order.
pub fn extract_bits(stego: &str) -> Vec<u8> {
    stego
        .chars()
        .filter(|&c| is_carrier_letter(c))
        .map(|c| u8::from(c.is_ascii_uppercase()))
        .collect()
}

/// Embed a tagged ciphertext into `carrier`.
///
/// # Errors
/// - [`StegoError::PayloadTooLarge`] / [`StegoError::EncodingError`] from
///   framing.
/// - [`StegoError::CarrierTooShort`] if the carrier has fewer than
///   `8 × (4 + len)` letters.
pub fn embed(tagged: &str, carrier: &str) -> Result<String, StegoError> {
    let frame = frame::build_frame(tagged)?;
    let bits = bytes_to_bits(&frame);
    debug_assert_eq!(bits.len(), required_bits(tagged.chars().count()));
    embed_bits(&bits, carrier)
}

/// Recover the tagged ciphertext hidden in `stego`.
///
/// A trailing group of fewer than 8 letters is ignored.
///
/// # Errors
/// [`StegoError::InvalidLengthHeader`] or [`StegoError::TruncatedPayload`]
/// if the casing does not hold a complete frame.
pub fn extract(stego: &str) -> Result<String, StegoError> {
    let bytes = bits_to_bytes(&extract_bits(stego));
    frame::parse_frame(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog. ";

    #[test]
    fn case_encodes_bits() {
        let out = embed_bits(&[1, 0, 1, 0], "abcd").unwrap();
        assert_eq!(out, "AbCd");
        let out = embed_bits(&[0, 0, 1, 1], "ABcd").unwrap();
        assert_eq!(out, "abCD");
    }

    #[test]
    fn non_letters_pass_through() {
        let out = embed_bits(&[1, 1, 0], "a-b 9 c!").unwrap();
        assert_eq!(out, "A-B 9 c!");
        assert_eq!(extract_bits(&out), [1, 1, 0]);
    }

    #[test]
    fn letters_after_payload_keep_case() {
        let out = embed_bits(&[0], "HeLLo").unwrap();
        assert_eq!(out, "heLLo");
    }

    #[test]
    fn too_short_carrier_rejected() {
        match embed_bits(&[1; 5], "abc, d") {
            Err(StegoError::CarrierTooShort { needed, available }) => {
                assert_eq!(needed, 5);
                assert_eq!(available, 4);
            }
            other => panic!("expected CarrierTooShort, got {other:?}"),
        }
    }

    #[test]
    fn exact_fit() {
        let out = embed_bits(&[1, 1, 1], "a b c").unwrap();
        assert_eq!(out, "A B C");
    }

    #[test]
    fn embed_extract_tagged_caesar() {
        let carrier = PANGRAM.repeat(4);
        assert!(carrier_capacity(&carrier) >= 136);
        let stego = embed("[caesar]KHOOR", &carrier).unwrap();
        assert_eq!(stego.to_lowercase(), carrier.to_lowercase());
        assert_eq!(extract(&stego).unwrap(), "[caesar]KHOOR");
    }

    #[test]
    fn embed_needs_full_frame() {
        // 136 bits needed; 135 letters available.
        let carrier = "x".repeat(135);
        assert!(matches!(
            embed("[caesar]KHOOR", &carrier),
            Err(StegoError::CarrierTooShort { needed: 136, available: 135 })
        ));
        let carrier = "x".repeat(136);
        assert!(embed("[caesar]KHOOR", &carrier).is_ok());
    }

    #[test]
    fn extract_from_plain_text_fails() {
        // Ordinary casing does not decode to four ASCII digits.
        assert!(matches!(
            extract(&PANGRAM.repeat(3)),
            Err(StegoError::InvalidLengthHeader)
        ));
        assert!(matches!(extract(""), Err(StegoError::InvalidLengthHeader)));
    }

    #[test]
    fn extract_truncated_stego() {
        let carrier = PANGRAM.repeat(4);
        let stego = embed("[caesar]KHOOR", &carrier).unwrap();
        // Keep the header and half the body: cut after 4 + 6 bytes of letters.
        let keep_letters = 8 * 10;
        let cut = stego
            .char_indices()
            .filter(|&(_, c)| is_carrier_letter(c))
            .nth(keep_letters)
            .map(|(i, _)| i)
            .unwrap();
        match extract(&stego[..cut]) {
            Err(StegoError::TruncatedPayload { declared, available }) => {
                assert_eq!(declared, 13);
                assert_eq!(available, 6);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }
}
