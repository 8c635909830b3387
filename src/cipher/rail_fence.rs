// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Rail Fence transposition cipher.
//!
//! Letters are written in a zig-zag across `rails` rows (down from row 0 to
//! row `rails - 1`, then back up) and the rows are read off top to bottom:
//!
//! ```text
//! W . . . E . . . C . . . R . . . L . . . T . . . E
//! . E . R . D . S . O . E . E . F . E . A . O . C .
//! . . A . . . I . . . V . . . D . . . E . . . N . .
//! ```
//!
//! gives `WECRLTE` + `ERDSOEEFEAOC` + `AIVDEN`.

use core::str::FromStr;

use super::{normalized_letters, ClassicalCipher};
use crate::stego::error::StegoError;

/// Smallest usable number of rails.
pub const MIN_RAILS: usize = 2;

/// Number of rails. Always at least [`MIN_RAILS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailCount(usize);

impl RailCount {
    /// Validate a rail count.
    ///
    /// # Errors
    /// [`StegoError::InvalidKey`] if `rails < 2`.
    pub fn new(rails: usize) -> Result<Self, StegoError> {
        if rails < MIN_RAILS {
            return Err(StegoError::invalid_key(
                RailFence::NAME,
                format!("need at least {MIN_RAILS} rails, got {rails}"),
            ));
        }
        Ok(Self(rails))
    }

    /// Rail count as a plain integer.
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for RailCount {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rails = s.trim().parse::<usize>().map_err(|_| {
            StegoError::invalid_key(RailFence::NAME, format!("rail count {s:?} is not a positive integer"))
        })?;
        Self::new(rails)
    }
}

/// Rail Fence cipher with a fixed rail count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: RailCount,
}

impl RailFence {
    /// Create a Rail Fence cipher over `rails` rows.
    pub fn new(rails: RailCount) -> Self {
        Self { rails }
    }

    /// Rows actually needed for `len` characters.
    ///
    /// With more rails than characters the zig-zag never turns back, so
    /// clamping to `len` yields the same row sequence without allocating
    /// rows that stay empty.
    fn rows_for(&self, len: usize) -> usize {
        self.rails.get().min(len.max(MIN_RAILS))
    }
}

/// Row index of each position in a zig-zag over `rails` rows.
fn zigzag(rails: usize) -> impl Iterator<Item = usize> {
    debug_assert!(rails >= MIN_RAILS);
    (0..rails).chain((1..rails - 1).rev()).cycle()
}

impl ClassicalCipher for RailFence {
    const NAME: &'static str = "railfence";

    fn encrypt(&self, text: &str) -> String {
        let letters: Vec<u8> = normalized_letters(text).collect();
        let rails = self.rows_for(letters.len());

        let mut fence = vec![Vec::new(); rails];
        for (&c, row) in letters.iter().zip(zigzag(rails)) {
            fence[row].push(c);
        }
        fence.concat().into_iter().map(char::from).collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        let chars: Vec<char> = ciphertext.chars().collect();
        let rails = self.rows_for(chars.len());
        let pattern: Vec<usize> = zigzag(rails).take(chars.len()).collect();

        let mut rail_len = vec![0usize; rails];
        for &row in &pattern {
            rail_len[row] += 1;
        }

        // Start offset of each row's segment within the ciphertext.
        let mut next = Vec::with_capacity(rails);
        let mut offset = 0;
        for len in rail_len {
            next.push(offset);
            offset += len;
        }

        pattern
            .into_iter()
            .map(|row| {
                let c = chars[next[row]];
                next[row] += 1;
                c
            })
            .collect()
    }
}

/// Encrypt `text` across `rails` rows.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `rails < 2`.
pub fn encrypt(text: &str, rails: usize) -> Result<String, StegoError> {
    Ok(RailFence::new(RailCount::new(rails)?).encrypt(text))
}

/// Decrypt Rail Fence ciphertext written across `rails` rows.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `rails < 2`.
pub fn decrypt(ciphertext: &str, rails: usize) -> Result<String, StegoError> {
    Ok(RailFence::new(RailCount::new(rails)?).decrypt(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "WEAREDISCOVEREDFLEEATONCE";

    #[test]
    fn three_rail_vector() {
        let ct = encrypt(PLAIN, 3).unwrap();
        assert_eq!(ct, "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(decrypt(&ct, 3).unwrap(), PLAIN);
    }

    #[test]
    fn two_rails_alternate() {
        assert_eq!(encrypt("ABCDEF", 2).unwrap(), "ACEBDF");
        assert_eq!(decrypt("ACEBDF", 2).unwrap(), "ABCDEF");
    }

    #[test]
    fn zigzag_pattern_bounces() {
        let rows: Vec<usize> = zigzag(4).take(10).collect();
        assert_eq!(rows, [0, 1, 2, 3, 2, 1, 0, 1, 2, 3]);
        let rows: Vec<usize> = zigzag(2).take(5).collect();
        assert_eq!(rows, [0, 1, 0, 1, 0]);
    }

    #[test]
    fn normalizes_input() {
        assert_eq!(
            encrypt("We are discovered; flee at once!", 3).unwrap(),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
    }

    #[test]
    fn more_rails_than_letters_is_identity() {
        assert_eq!(encrypt("abc", 10).unwrap(), "ABC");
        assert_eq!(decrypt("ABC", 10).unwrap(), "ABC");
        assert_eq!(encrypt("abc", usize::MAX).unwrap(), "ABC");
    }

    #[test]
    fn roundtrip_many_rail_counts() {
        for rails in 2..30 {
            let ct = encrypt(PLAIN, rails).unwrap();
            assert_eq!(ct.len(), PLAIN.len());
            assert_eq!(decrypt(&ct, rails).unwrap(), PLAIN, "rails={rails}");
        }
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(encrypt("", 3).unwrap(), "");
        assert_eq!(decrypt("", 3).unwrap(), "");
        assert_eq!(encrypt("x", 3).unwrap(), "X");
        assert_eq!(decrypt("X", 3).unwrap(), "X");
    }

    #[test]
    fn too_few_rails_rejected() {
        for rails in [0, 1] {
            assert!(matches!(
                encrypt(PLAIN, rails),
                Err(StegoError::InvalidKey { algorithm: "railfence", .. })
            ));
        }
        assert!("-3".parse::<RailCount>().is_err());
        assert!("1".parse::<RailCount>().is_err());
        assert!("two".parse::<RailCount>().is_err());
        assert_eq!(" 4".parse::<RailCount>().unwrap().get(), 4);
    }
}
