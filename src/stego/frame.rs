// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Payload frame construction and parsing.
//!
//! The frame is the byte container that wraps the tagged ciphertext before
//! it is spread over the carrier's letter casing:
//!
//! ```text
//! [4 bytes] length header: ASCII decimal, zero-padded ("0013")
//! [N bytes] tagged ciphertext, one byte per character (code point 0-255)
//! ```
//!
//! Total frame size = 4 + N bytes, i.e. 8 × (4 + N) bits. The header counts
//! characters of the tagged ciphertext, so N is at most 9999.

use crate::stego::error::StegoError;

/// Width of the decimal length header in bytes.
pub const HEADER_LEN: usize = 4;

/// Largest tagged ciphertext the 4-digit header can describe.
pub const MAX_TAGGED_LEN: usize = 9999;

/// Build a payload frame from a tagged ciphertext.
///
/// # Errors
/// - [`StegoError::PayloadTooLarge`] if `tagged` has more than 9999 characters.
/// - [`StegoError::EncodingError`] if a character is above code point 255.
pub fn build_frame(tagged: &str) -> Result<Vec<u8>, StegoError> {
    let len = tagged.chars().count();
    if len > MAX_TAGGED_LEN {
        return Err(StegoError::PayloadTooLarge { len });
    }

    let mut frame = Vec::with_capacity(HEADER_LEN + len);
    frame.extend_from_slice(format!("{len:04}").as_bytes());
    for ch in tagged.chars() {
        let byte = u8::try_from(u32::from(ch)).map_err(|_| StegoError::EncodingError { ch })?;
        frame.push(byte);
    }
    Ok(frame)
}

/// Parse a payload frame and return the tagged ciphertext.
///
/// `data` may be longer than the frame; bytes past `4 + n` are ignored.
///
/// # Errors
/// - [`StegoError::InvalidLengthHeader`] if the first four bytes are not
///   ASCII digits (including when fewer than four bytes are present).
/// - [`StegoError::TruncatedPayload`] if fewer than `n` bytes follow the header.
pub fn parse_frame(data: &[u8]) -> Result<String, StegoError> {
    let header = data.get(..HEADER_LEN).ok_or(StegoError::InvalidLengthHeader)?;
    if !header.iter().all(u8::is_ascii_digit) {
        return Err(StegoError::InvalidLengthHeader);
    }
    let declared = header
        .iter()
        .fold(0usize, |acc, &d| acc * 10 + usize::from(d - b'0'));

    let body = &data[HEADER_LEN..];
    if body.len() < declared {
        return Err(StegoError::TruncatedPayload {
            declared,
            available: body.len(),
        });
    }

    Ok(body[..declared].iter().map(|&b| char::from(b)).collect())
}

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// A trailing group of fewer than 8 bits is dropped.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | ((bit & 1) << (7 - i)))
        })
        .collect()
}
