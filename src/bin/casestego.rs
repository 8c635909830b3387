// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! casestego CLI - hide and recover messages in text casing

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use casestego::{
    carrier_capacity, decode_request, encode_request, max_tagged_len, peek_algorithm, Algorithm,
};

/// Hide a classically-enciphered message in the letter casing of a text
#[derive(Parser)]
#[command(name = "casestego")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a secret and embed it in a carrier text
    Encode {
        /// Message to hide
        #[arg(short, long)]
        secret: String,
        /// Cipher: vigenere, caesar or railfence
        #[arg(short, long, env = "CASESTEGO_ALGORITHM", value_parser = parse_algorithm)]
        algorithm: Algorithm,
        /// Cipher key (word, shift or rail count)
        #[arg(short, long, env = "CASESTEGO_KEY", hide_env_values = true)]
        key: String,
        /// Carrier text file (stdin if omitted)
        carrier: Option<PathBuf>,
    },

    /// Extract and decrypt a secret from a stego text
    Decode {
        /// Cipher the message was encoded with
        #[arg(short, long, env = "CASESTEGO_ALGORITHM", value_parser = parse_algorithm)]
        algorithm: Algorithm,
        /// Cipher key
        #[arg(short, long, env = "CASESTEGO_KEY", hide_env_values = true)]
        key: String,
        /// Stego text file (stdin if omitted)
        stego: Option<PathBuf>,
    },

    /// Show which algorithm a stego text was encoded with
    Peek {
        /// Stego text file (stdin if omitted)
        stego: Option<PathBuf>,
    },

    /// Show how much a carrier text can hold
    Capacity {
        /// Carrier text file (stdin if omitted)
        carrier: Option<PathBuf>,
    },
}

/// `RUST_LOG` if set and valid, otherwise `warn`.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: casestego::StegoError| e.to_string())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            secret,
            algorithm,
            key,
            carrier,
        } => {
            let carrier = read_input(carrier.as_ref())?;
            let stego = encode_request(&secret, &carrier, algorithm, &key)
                .context("Failed to encode message")?;
            print!("{stego}");
        }
        Commands::Decode {
            algorithm,
            key,
            stego,
        } => {
            let stego = read_input(stego.as_ref())?;
            let secret =
                decode_request(&stego, algorithm, &key).context("Failed to decode message")?;
            println!("{secret}");
        }
        Commands::Peek { stego } => {
            let stego = read_input(stego.as_ref())?;
            let algorithm = peek_algorithm(&stego).context("No tagged message found")?;
            println!("{algorithm}");
        }
        Commands::Capacity { carrier } => {
            let carrier = read_input(carrier.as_ref())?;
            println!("Letters (bits):        {}", carrier_capacity(&carrier));
            println!("Max tagged ciphertext: {} chars", max_tagged_len(&carrier));
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: both cases mutate the process environment.
    #[test]
    fn log_filter_honours_rust_log() {
        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::WARN));
    }
}
