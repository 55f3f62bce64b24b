// Sun Oct 18 2026 - Alex

pub mod display;

pub use display::ErrorDisplay;

use crate::memory::MemoryError;
use crate::pattern::PatternError;
use thiserror::Error;

pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FILE: i32 = 2;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid signature: {0}")]
    Compile(#[from] PatternError),

    #[error(transparent)]
    FileAccess(#[from] MemoryError),
}

impl CliError {
    /// Keeps the first line of a clap error, minus its `error: ` prefix.
    pub fn from_clap(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let line = rendered.lines().next().unwrap_or_default();
        Self::Usage(line.trim_start_matches("error: ").trim().to_string())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Compile(_) => EXIT_USAGE,
            Self::FileAccess(_) => EXIT_FILE,
        }
    }

    pub fn shows_usage(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}
