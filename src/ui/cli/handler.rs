// Sun Oct 18 2026 - Alex

use super::args;
use crate::config::Config;
use crate::memory::BinaryBuffer;
use crate::output::OutputFormatter;
use crate::ui::errors::CliError;
use crate::utils::{init_logging, scoped_timer};
use anyhow::Context;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;

/// Runs one invocation: parse, compile, load, count, print.
///
/// Nothing is written to `out` unless every signature compiled and the whole
/// file was read.
pub struct CommandHandler {
    formatter: OutputFormatter,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            formatter: OutputFormatter::new(),
        }
    }

    pub fn with_formatter(formatter: OutputFormatter) -> Self {
        Self { formatter }
    }

    pub fn execute<I, T, W>(&self, argv: I, out: &mut W) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        W: Write,
    {
        init_logging();

        let parsed = match args::parse_from(argv) {
            Ok(parsed) => parsed,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{}", err).context("Failed writing help")?;
                return Ok(());
            }
            Err(err) => return Err(CliError::from_clap(&err).into()),
        };

        let config = Config::build(parsed.file, &parsed.sources).map_err(CliError::from)?;
        config.validate().map_err(CliError::Usage)?;

        let counts = self.scan(&config)?;
        self.formatter
            .write(out, &counts)
            .context("Failed writing counts")?;

        Ok(())
    }

    fn scan(&self, config: &Config) -> Result<Vec<usize>, CliError> {
        let buffer = {
            let _timer = scoped_timer("load");
            BinaryBuffer::load(&config.target_file)?
        };

        let _timer = scoped_timer("scan");
        let matcher = buffer.matcher();
        let counts = matcher.count_all(&config.signatures);

        for (i, (signature, count)) in config.signatures.iter().zip(&counts).enumerate() {
            log::debug!("Signature #{} [{}]: {} matches", i, signature, count);
        }
        log::info!(
            "Scanned {} with {} signatures",
            buffer.path().display(),
            config.signatures.len()
        );

        Ok(counts)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
