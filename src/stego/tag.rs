// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Algorithm tag wrapped around the ciphertext before embedding.
//!
//! ```text
//! [<algorithm-name>]<ciphertext>
//! ```
//!
//! The tag lets the decoder refuse to run the wrong cipher over a payload.
//! Algorithm names never contain `]`.

use crate::stego::error::StegoError;

/// Prefix `ciphertext` with a bracketed algorithm name.
pub fn tag(ciphertext: &str, algorithm: &str) -> String {
    debug_assert!(!algorithm.contains(']'), "algorithm name must not contain ']'");
    let mut out = String::with_capacity(algorithm.len() + ciphertext.len() + 2);
    out.push('[');
    out.push_str(algorithm);
    out.push(']');
    out.push_str(ciphertext);
    out
}

/// Split a tagged ciphertext into `(algorithm, ciphertext)`.
///
/// The algorithm name runs from after the leading `[` to the first `]`.
///
/// # Errors
/// [`StegoError::MalformedTag`] if `tagged` does not start with `[` or has
/// no closing `]`.
pub fn untag(tagged: &str) -> Result<(&str, &str), StegoError> {
    let rest = tagged.strip_prefix('[').ok_or(StegoError::MalformedTag)?;
    rest.split_once(']').ok_or(StegoError::MalformedTag)
}

/// Check that the stored algorithm matches the requested one.
///
/// # Errors
/// [`StegoError::AlgorithmMismatch`] if they differ.
pub fn validate(stored: &str, requested: &str) -> Result<(), StegoError> {
    if stored != requested {
        return Err(StegoError::AlgorithmMismatch {
            stored: stored.to_string(),
            requested: requested.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_layout() {
        assert_eq!(tag("KHOOR", "caesar"), "[caesar]KHOOR");
        assert_eq!(tag("", "railfence"), "[railfence]");
    }

    #[test]
    fn untag_inverts_tag() {
        for (ct, algo) in [("KHOOR", "caesar"), ("", "vigenere"), ("A]B", "x"), ("", "")] {
            assert_eq!(untag(&tag(ct, algo)).unwrap(), (algo, ct));
        }
    }

    #[test]
    fn name_ends_at_first_bracket() {
        assert_eq!(untag("[a]b]c").unwrap(), ("a", "b]c"));
    }

    #[test]
    fn malformed_tags_rejected() {
        for bad in ["caesar]KHOOR", "[caesarKHOOR", "", "KHOOR", " [caesar]KHOOR"] {
            assert!(
                matches!(untag(bad), Err(StegoError::MalformedTag)),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn validate_mismatch() {
        assert!(validate("caesar", "caesar").is_ok());
        match validate("vigenere", "caesar") {
            Err(StegoError::AlgorithmMismatch { stored, requested }) => {
                assert_eq!(stored, "vigenere");
                assert_eq!(requested, "caesar");
            }
            other => panic!("expected AlgorithmMismatch, got {other:?}"),
        }
    }
}
