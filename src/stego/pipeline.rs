// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Encode/decode pipeline.
//!
//! Encode: cipher encrypt → tag → frame → case embedding.
//! Decode: case extraction → unframe → untag → algorithm check → decrypt.

use tracing::debug;

use crate::cipher::{Algorithm, CipherKey};
use crate::stego::casing;
use crate::stego::error::StegoError;
use crate::stego::tag;

/// Encrypt `secret` with `key` and hide it in the casing of `carrier`.
///
/// # Errors
/// - [`StegoError::EncodingError`] / [`StegoError::PayloadTooLarge`] if the
///   tagged ciphertext cannot be framed.
/// - [`StegoError::CarrierTooShort`] if `carrier` has too few letters.
pub fn encode(secret: &str, carrier: &str, key: &CipherKey) -> Result<String, StegoError> {
    let algorithm = key.algorithm();
    let ciphertext = key.encrypt(secret);
    let tagged = tag::tag(&ciphertext, algorithm.name());
    debug!(
        algorithm = algorithm.name(),
        tagged_len = tagged.len(),
        "embedding tagged ciphertext"
    );
    casing::embed(&tagged, carrier)
}

/// Recover and decrypt the message hidden in `stego`.
///
/// # Errors
/// - [`StegoError::InvalidLengthHeader`] / [`StegoError::TruncatedPayload`]
///   if no complete frame is present.
/// - [`StegoError::MalformedTag`] if the frame does not carry an algorithm tag.
/// - [`StegoError::AlgorithmMismatch`] if `key` is for a different algorithm.
pub fn decode(stego: &str, key: &CipherKey) -> Result<String, StegoError> {
    let ciphertext = open(stego, key.algorithm())?;
    Ok(key.decrypt(&ciphertext))
}

/// Encode path taking an unparsed key string.
///
/// The key is validated before anything else runs.
///
/// # Errors
/// [`StegoError::InvalidKey`] plus everything [`encode`] returns.
pub fn encode_request(
    secret: &str,
    carrier: &str,
    algorithm: Algorithm,
    key: &str,
) -> Result<String, StegoError> {
    let key = CipherKey::parse(algorithm, key)?;
    encode(secret, carrier, &key)
}

/// Decode path taking an unparsed key string.
///
/// Structural problems and algorithm mismatches are reported before the key
/// is parsed, so a wrong algorithm is never masked by an `InvalidKey`.
///
/// # Errors
/// Everything [`decode`] returns, then [`StegoError::InvalidKey`].
pub fn decode_request(stego: &str, algorithm: Algorithm, key: &str) -> Result<String, StegoError> {
    let ciphertext = open(stego, algorithm)?;
    let key = CipherKey::parse(algorithm, key)?;
    Ok(key.decrypt(&ciphertext))
}

/// Report which algorithm `stego` was encoded with, without a key.
///
/// The name is returned as stored; it may not be a supported [`Algorithm`]
/// if the stego text came from elsewhere.
///
/// # Errors
/// Frame and tag errors, as for [`decode`].
pub fn peek_algorithm(stego: &str) -> Result<String, StegoError> {
    let tagged = casing::extract(stego)?;
    let (stored, _) = tag::untag(&tagged)?;
    Ok(stored.to_string())
}

/// Extract, untag and check the algorithm; returns the bare ciphertext.
fn open(stego: &str, algorithm: Algorithm) -> Result<String, StegoError> {
    let tagged = casing::extract(stego)?;
    let (stored, ciphertext) = tag::untag(&tagged)?;
    debug!(stored, requested = algorithm.name(), len = ciphertext.len(), "extracted tagged ciphertext");
    tag::validate(stored, algorithm.name())?;
    Ok(ciphertext.to_string())
}
