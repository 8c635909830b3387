// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Caesar shift cipher.

use core::str::FromStr;

use super::{normalized_letters, ClassicalCipher};
use crate::stego::error::StegoError;

/// Alphabet shift. Any integer is accepted; only its value mod 26 matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarShift(pub i64);

impl FromStr for CaesarShift {
    type Err = StegoError;

    /// Parses a decimal integer of any magnitude, with an optional sign.
    /// The result is already reduced into `0..26`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StegoError::invalid_key(Caesar::NAME, format!("shift {s:?} is not an integer"));

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Reduce digit by digit so arbitrarily long shifts never overflow.
        let magnitude = digits
            .bytes()
            .fold(0i64, |acc, d| (acc * 10 + i64::from(d - b'0')) % 26);
        let shift = if negative { (26 - magnitude) % 26 } else { magnitude };
        Ok(CaesarShift(shift))
    }
}

/// Caesar cipher with a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: CaesarShift,
}

impl Caesar {
    /// Create a Caesar cipher shifting by `shift`.
    pub fn new(shift: CaesarShift) -> Self {
        Self { shift }
    }

    /// Shift reduced into `0..26`.
    fn offset(&self) -> u8 {
        // rem_euclid keeps negative shifts in range.
        self.shift.0.rem_euclid(26) as u8
    }
}

impl ClassicalCipher for Caesar {
    const NAME: &'static str = "caesar";

    fn encrypt(&self, text: &str) -> String {
        shift_letters(text, self.offset())
    }

    /// Shifts backward. Input is normalized the same way as [`encrypt`](Self::encrypt),
    /// which is the identity on ciphertext this cipher produced.
    fn decrypt(&self, ciphertext: &str) -> String {
        shift_letters(ciphertext, (26 - self.offset()) % 26)
    }
}

fn shift_letters(text: &str, offset: u8) -> String {
    normalized_letters(text)
        .map(|b| ((b - b'A' + offset) % 26 + b'A') as char)
        .collect()
}

/// Encrypt `text` with a Caesar shift.
pub fn encrypt(text: &str, shift: i64) -> String {
    Caesar::new(CaesarShift(shift)).encrypt(text)
}

/// Decrypt Caesar ciphertext.
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    Caesar::new(CaesarShift(shift)).decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_shift_three() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn lowercase_and_punctuation_normalized() {
        assert_eq!(encrypt("Hello, World!", 3), "KHOORZRUOG");
    }

    #[test]
    fn wraps_around_alphabet() {
        assert_eq!(encrypt("XYZ", 3), "ABC");
        assert_eq!(decrypt("ABC", 3), "XYZ");
    }

    #[test]
    fn negative_and_large_shifts() {
        assert_eq!(encrypt("ABC", -1), "ZAB");
        assert_eq!(encrypt("ABC", 27), "BCD");
        assert_eq!(encrypt("ABC", -27), encrypt("ABC", 25));
        assert_eq!(decrypt(&encrypt("ATTACK", -40), -40), "ATTACK");
        assert_eq!(decrypt(&encrypt("ABC", i64::MIN), i64::MIN), "ABC");
    }

    #[test]
    fn zero_shift_is_normalization_only() {
        assert_eq!(encrypt("a b c", 0), "ABC");
    }

    #[test]
    fn shift_parsing() {
        assert_eq!(" 7 ".parse::<CaesarShift>().unwrap(), CaesarShift(7));
        assert_eq!("+29".parse::<CaesarShift>().unwrap(), CaesarShift(3));
        assert_eq!("-3".parse::<CaesarShift>().unwrap(), CaesarShift(23));
        assert_eq!("-26".parse::<CaesarShift>().unwrap(), CaesarShift(0));
        assert!(matches!(
            "three".parse::<CaesarShift>(),
            Err(StegoError::InvalidKey { algorithm: "caesar", .. })
        ));
        for bad in ["", "-", "+", "1.5", "--3", "3 4", "1_000"] {
            assert!(bad.parse::<CaesarShift>().is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn shift_beyond_i64_range() {
        // 10^20 = 22 (mod 26); -10^20 = 4 (mod 26).
        let big = "100000000000000000000";
        assert_eq!(big.parse::<CaesarShift>().unwrap(), CaesarShift(22));
        assert_eq!(format!("-{big}").parse::<CaesarShift>().unwrap(), CaesarShift(4));

        let cipher = Caesar::new(big.parse().unwrap());
        assert_eq!(cipher.encrypt("HELLO"), encrypt("HELLO", 22));
        assert_eq!(cipher.decrypt(&cipher.encrypt("HELLO")), "HELLO");
    }
}
