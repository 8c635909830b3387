// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Carrier capacity estimation.
//!
//! Every ASCII letter of the carrier holds exactly one bit, so capacity is
//! exact rather than estimated. The frame costs 8 bits per character plus a
//! fixed 32-bit length header.

use crate::stego::casing::is_carrier_letter;
use crate::stego::frame::{HEADER_LEN, MAX_TAGGED_LEN};

/// Number of bits `carrier` can hold (its letter count).
pub fn carrier_capacity(carrier: &str) -> usize {
    carrier.chars().filter(|&c| is_carrier_letter(c)).count()
}

/// Bits needed to embed a tagged ciphertext of `tagged_len` characters.
pub fn required_bits(tagged_len: usize) -> usize {
    8 * (HEADER_LEN + tagged_len)
}

/// Longest tagged ciphertext, in characters, that fits in `carrier`.
///
/// Returns 0 when the carrier cannot even hold the length header; callers
/// should check [`carrier_capacity`] against [`required_bits`]`(0)` to tell
/// "room for an empty message" apart from "no room at all".
pub fn max_tagged_len(carrier: &str) -> usize {
    (carrier_capacity(carrier) / 8)
        .saturating_sub(HEADER_LEN)
        .min(MAX_TAGGED_LEN)
}
