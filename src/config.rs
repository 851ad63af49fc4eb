//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use thiserror::Error;

use crate::input::{KeyBindings, DEFAULT_ROTATE_KEY};
use crate::types::DEFAULT_FRAME_MS;

const MAX_FRAME_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rotate key must be a single character, got {0:?}")]
    RotateKeyLength(String),
    #[error("rotate key {0:?} is reserved or not printable")]
    RotateKeyReserved(char),
    #[error("frame period must be between 1 and 1000 ms, got {0}")]
    FramePeriod(u64),
}

/// Falling-block puzzle game for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about)]
pub struct Args {
    /// Seed for shape selection; the same seed replays the same pieces.
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Key that rotates the falling piece (in addition to Up).
    #[arg(long, env = "BLOCKFALL_ROTATE_KEY", default_value_t = DEFAULT_ROTATE_KEY.to_string())]
    pub rotate_key: String,

    /// Frame period in milliseconds.
    #[arg(long, env = "BLOCKFALL_FRAME_MS", default_value_t = DEFAULT_FRAME_MS as u64)]
    pub frame_ms: u64,

    /// Write logs to this file. Logging is off without it.
    #[arg(long, env = "BLOCKFALL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub bindings: KeyBindings,
    pub frame_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let mut chars = args.rotate_key.chars();
        let rotate = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ConfigError::RotateKeyLength(args.rotate_key)),
        };
        let bindings = KeyBindings::new(rotate).ok_or(ConfigError::RotateKeyReserved(rotate))?;

        if args.frame_ms == 0 || args.frame_ms > MAX_FRAME_MS {
            return Err(ConfigError::FramePeriod(args.frame_ms));
        }

        Ok(Self {
            seed: args.seed.unwrap_or_else(clock_seed),
            bindings,
            frame_ms: args.frame_ms,
            log_file: args.log_file,
        })
    }

    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_args(Args::parse())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
