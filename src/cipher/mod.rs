// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Classical ciphers used to obscure a message before embedding.
//!
//! Three independent, stateless transforms are provided:
//!
//! - **Vigenère** ([`vigenere`]): polyalphabetic substitution keyed by a word.
//! - **Caesar** ([`caesar`]): fixed alphabet shift.
//! - **Rail Fence** ([`rail_fence`]): zig-zag transposition over N rows.
//!
//! All encrypt operations uppercase their input and drop every character that
//! is not an ASCII letter, so ciphertext is always `A–Z` only. None of these
//! provide any real confidentiality.
//!
//! The caller selects a cipher with [`Algorithm`] and turns the raw key string
//! into a typed [`CipherKey`] once, at the boundary. Invalid keys fail with
//! [`StegoError::InvalidKey`] before any text is transformed.

pub mod caesar;
pub mod rail_fence;
pub mod vigenere;

use core::fmt;
use core::str::FromStr;

use crate::stego::error::StegoError;

pub use caesar::{Caesar, CaesarShift};
pub use rail_fence::{RailCount, RailFence};
pub use vigenere::{Vigenere, VigenereKey};

/// A reversible text transform with a fixed key.
pub trait ClassicalCipher {
    /// Wire name of the algorithm, as written into the stego tag.
    const NAME: &'static str;

    /// Encrypt `text`, producing uppercase `A–Z` ciphertext.
    fn encrypt(&self, text: &str) -> String;

    /// Decrypt ciphertext produced by [`encrypt`](Self::encrypt).
    fn decrypt(&self, ciphertext: &str) -> String;
}

/// Supported cipher algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Vigenere,
    Caesar,
    RailFence,
}

impl Algorithm {
    /// All algorithms, in the order they are offered to users.
    pub const ALL: [Algorithm; 3] = [Algorithm::Vigenere, Algorithm::Caesar, Algorithm::RailFence];

    /// Wire name used in tags and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vigenere => Vigenere::NAME,
            Self::Caesar => Caesar::NAME,
            Self::RailFence => RailFence::NAME,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| StegoError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// A validated key bound to its algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    Vigenere(Vigenere),
    Caesar(Caesar),
    RailFence(RailFence),
}

impl CipherKey {
    /// Parse a raw key string for the given algorithm.
    ///
    /// # Errors
    /// [`StegoError::InvalidKey`] if the key is not valid for `algorithm`:
    /// an empty or non-letter Vigenère key, a non-integer Caesar shift, or a
    /// rail count that is not an integer ≥ 2.
    pub fn parse(algorithm: Algorithm, key: &str) -> Result<Self, StegoError> {
        Ok(match algorithm {
            Algorithm::Vigenere => Self::Vigenere(Vigenere::new(key.parse()?)),
            Algorithm::Caesar => Self::Caesar(Caesar::new(key.parse()?)),
            Algorithm::RailFence => Self::RailFence(RailFence::new(key.parse()?)),
        })
    }

    /// Algorithm this key belongs to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Vigenere(_) => Algorithm::Vigenere,
            Self::Caesar(_) => Algorithm::Caesar,
            Self::RailFence(_) => Algorithm::RailFence,
        }
    }

    /// Encrypt `text` with the bound cipher.
    pub fn encrypt(&self, text: &str) -> String {
        match self {
            Self::Vigenere(c) => c.encrypt(text),
            Self::Caesar(c) => c.encrypt(text),
            Self::RailFence(c) => c.encrypt(text),
        }
    }

    /// Decrypt `ciphertext` with the bound cipher.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        match self {
            Self::Vigenere(c) => c.decrypt(ciphertext),
            Self::Caesar(c) => c.decrypt(ciphertext),
            Self::RailFence(c) => c.decrypt(ciphertext),
        }
    }
}

/// Uppercase ASCII letters of `text`, in order; everything else is dropped.
pub(crate) fn normalized_letters(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
}
