// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Steganographic encoding and decoding pipelines.
//!
//! A message travels through four layers:
//!
//! 1. **Cipher** ([`crate::cipher`]): classical encryption to `A–Z`.
//! 2. **Tag** ([`tag`]): `[algorithm]` prefix so the decoder can refuse the
//!    wrong cipher.
//! 3. **Frame** ([`frame`]): 4-digit decimal length header, one byte per
//!    character, expanded MSB-first to bits.
//! 4. **Casing** ([`casing`]): one bit per carrier letter, uppercase = 1.
//!
//! [`encode_request`] / [`decode_request`] run the whole stack; the lower
//! layers are public for callers that only need part of it.

pub mod batch;
pub mod capacity;
pub mod casing;
pub mod error;
pub mod frame;
mod pipeline;
pub mod tag;

pub use batch::decode_batch;
pub use capacity::{carrier_capacity, max_tagged_len, required_bits};
pub use casing::{embed, extract};
pub use error::StegoError;
pub use pipeline::{decode, decode_request, encode, encode_request, peek_algorithm};
