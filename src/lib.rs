// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # casestego
//!
//! Hides a short message in the letter casing of ordinary text. The message
//! is first run through a classical cipher (Vigenère, Caesar or Rail Fence),
//! tagged with the algorithm name, length-prefixed, and then written one bit
//! per carrier letter: uppercase for 1, lowercase for 0.
//!
//! None of this is secure. The ciphers are trivially breakable and the
//! casing pattern is obvious to anyone who looks. The crate is pure: no I/O,
//! no global state, and every call is independent.
//!
//! # Quick start
//!
//! ```rust
//! use casestego::{decode_request, encode_request, Algorithm};
//!
//! let carrier = "The quick brown fox jumps over the lazy dog. ".repeat(8);
//! let stego = encode_request("attack at dawn", &carrier, Algorithm::Vigenere, "lemon").unwrap();
//! let secret = decode_request(&stego, Algorithm::Vigenere, "lemon").unwrap();
//! assert_eq!(secret, "ATTACKATDAWN");
//! ```

pub mod cipher;
pub mod stego;

pub use cipher::{Algorithm, CipherKey, ClassicalCipher};
pub use stego::{decode, decode_request, encode, encode_request, peek_algorithm, StegoError};
pub use stego::{carrier_capacity, decode_batch, max_tagged_len, required_bits};
