// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the cipher and steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from key parsing through
//! carrier embedding and payload extraction.

use core::fmt;

/// Errors that can occur during encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The key is malformed or out of range for the chosen algorithm.
    InvalidKey {
        /// Wire name of the algorithm the key was meant for.
        algorithm: &'static str,
        /// What is wrong with the key.
        reason: String,
    },
    /// The carrier has fewer alphabetic characters than payload bits.
    CarrierTooShort {
        /// Bits required by the payload.
        needed: usize,
        /// Alphabetic characters available in the carrier.
        available: usize,
    },
    /// A payload character does not fit in a single byte.
    EncodingError {
        /// The offending character.
        ch: char,
    },
    /// The tagged ciphertext does not fit the 4-digit length header.
    PayloadTooLarge {
        /// Length of the tagged ciphertext in characters.
        len: usize,
    },
    /// The extracted text is not of the form `[name]ciphertext`.
    MalformedTag,
    /// The stego text was produced with a different algorithm.
    AlgorithmMismatch {
        /// Algorithm recorded in the tag.
        stored: String,
        /// Algorithm the caller asked to decode with.
        requested: String,
    },
    /// The first four extracted characters are not decimal digits.
    InvalidLengthHeader,
    /// Fewer characters were extracted than the length header declares.
    TruncatedPayload {
        /// Length declared by the header.
        declared: usize,
        /// Characters actually available after the header.
        available: usize,
    },
    /// The algorithm identifier is not one of the supported ciphers.
    UnsupportedAlgorithm(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { algorithm, reason } => {
                write!(f, "invalid key for {algorithm}: {reason}")
            }
            Self::CarrierTooShort { needed, available } => write!(
                f,
                "carrier text too short: need {needed} letters, have {available}"
            ),
            Self::EncodingError { ch } => {
                write!(f, "character {ch:?} cannot be encoded in a single byte")
            }
            Self::PayloadTooLarge { len } => {
                write!(f, "message too long: {len} characters (max 9999)")
            }
            Self::MalformedTag => write!(f, "invalid stego format"),
            Self::AlgorithmMismatch { stored, requested } => write!(
                f,
                "algorithm mismatch: encrypted with {stored}, not {requested}"
            ),
            Self::InvalidLengthHeader => write!(f, "invalid payload length header"),
            Self::TruncatedPayload { declared, available } => write!(
                f,
                "payload truncated: header declares {declared} characters, found {available}"
            ),
            Self::UnsupportedAlgorithm(name) => write!(f, "unsupported algorithm: {name:?}"),
        }
    }
}

impl std::error::Error for StegoError {}

impl StegoError {
    pub(crate) fn invalid_key(algorithm: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            algorithm,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_algorithms() {
        let err = StegoError::AlgorithmMismatch {
            stored: "vigenere".into(),
            requested: "caesar".into(),
        };
        assert_eq!(
            err.to_string(),
            "algorithm mismatch: encrypted with vigenere, not caesar"
        );
    }

    #[test]
    fn carrier_too_short_reports_counts() {
        let err = StegoError::CarrierTooShort { needed: 136, available: 12 };
        let msg = err.to_string();
        assert!(msg.contains("136"), "{msg}");
        assert!(msg.contains("12"), "{msg}");
    }
}
