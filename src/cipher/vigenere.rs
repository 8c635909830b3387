// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Vigenère cipher.
//!
//! Encryption counts only letters when advancing through the key, so
//! `"ATTACK AT DAWN"` and `"ATTACKATDAWN"` encrypt identically. Decryption
//! advances the key on *every* input character and does not filter: it is
//! only an exact inverse on letters-only ciphertext that starts at key
//! position 0, which is exactly what [`Vigenere::encrypt`] produces.

use core::fmt;
use core::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{normalized_letters, ClassicalCipher};
use crate::stego::error::StegoError;

/// Uppercased Vigenère key. Non-empty, ASCII letters only.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct VigenereKey(Vec<u8>);

impl VigenereKey {
    /// Key letters as `A–Z` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for VigenereKey {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(StegoError::invalid_key(Vigenere::NAME, "key must not be empty"));
        }
        if !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(StegoError::invalid_key(
                Vigenere::NAME,
                "key must contain only letters A-Z",
            ));
        }
        Ok(Self(s.bytes().map(|b| b.to_ascii_uppercase()).collect()))
    }
}

impl fmt::Debug for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VigenereKey(<{} letters>)", self.0.len())
    }
}

/// Vigenère cipher with a fixed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: VigenereKey,
}

impl Vigenere {
    /// Create a Vigenère cipher with a validated key.
    pub fn new(key: VigenereKey) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for Vigenere {
    const NAME: &'static str = "vigenere";

    fn encrypt(&self, text: &str) -> String {
        let key = self.key.as_bytes();
        normalized_letters(text)
            .zip(key.iter().cycle())
            .map(|(c, &k)| ((c - b'A' + k - b'A') % 26 + b'A') as char)
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        let key = self.key.as_bytes();
        ciphertext
            .chars()
            .zip(key.iter().cycle())
            .map(|(c, &k)| {
                let v = (i64::from(u32::from(c)) - i64::from(k)).rem_euclid(26) as u8;
                (v + b'A') as char
            })
            .collect()
    }
}

/// Encrypt `text` with a Vigenère key.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `key` is empty or contains non-letters.
pub fn encrypt(text: &str, key: &str) -> Result<String, StegoError> {
    Ok(Vigenere::new(key.parse()?).encrypt(text))
}

/// Decrypt letters-only Vigenère ciphertext.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `key` is empty or contains non-letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, StegoError> {
    Ok(Vigenere::new(key.parse()?).decrypt(ciphertext))
}
