// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Batch decoding of independent stego texts.
//!
//! When the `parallel` feature is enabled, decodes run concurrently via
//! rayon. Every decode is a pure function of its input, so no coordination
//! is needed between them.

use tracing::debug;

use crate::cipher::{Algorithm, CipherKey};
use crate::stego::error::StegoError;
use crate::stego::pipeline::decode;

/// Decode every stego text in `stegos` with the same algorithm and key.
///
/// Results are returned in input order, one per stego text.
///
/// # Errors
/// The outer error is [`StegoError::InvalidKey`], reported once for the whole
/// batch. Per-item failures are in the inner results.
pub fn decode_batch<S>(
    stegos: &[S],
    algorithm: Algorithm,
    key: &str,
) -> Result<Vec<Result<String, StegoError>>, StegoError>
where
    S: AsRef<str> + Sync,
{
    let key = CipherKey::parse(algorithm, key)?;
    debug!(count = stegos.len(), algorithm = algorithm.name(), "batch decode");
    Ok(decode_all(stegos, &key))
}

#[cfg(feature = "parallel")]
fn decode_all<S>(stegos: &[S], key: &CipherKey) -> Vec<Result<String, StegoError>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    stegos.par_iter().map(|s| decode(s.as_ref(), key)).collect()
}

#[cfg(not(feature = "parallel"))]
fn decode_all<S>(stegos: &[S], key: &CipherKey) -> Vec<Result<String, StegoError>>
where
    S: AsRef<str> + Sync,
{
    stegos.iter().map(|s| decode(s.as_ref(), key)).collect()
}
