// Sun Oct 18 2026 - Alex

use super::{CliError, EXIT_USAGE};
use crate::ui::cli::args::usage_text;
use colored::Colorize;
use std::error::Error;

pub struct ErrorDisplay {
    show_cause_chain: bool,
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            show_cause_chain: true,
            color_enabled: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    pub fn without_cause_chain(mut self) -> Self {
        self.show_cause_chain = false;
        self
    }

    fn prefix(&self) -> String {
        if self.color_enabled {
            "[!]".red().to_string()
        } else {
            "[!]".to_string()
        }
    }

    pub fn format<E: Error + ?Sized>(&self, error: &E) -> String {
        let mut output = format!("{} {}\n", self.prefix(), error);

        if self.show_cause_chain {
            let mut source = error.source();
            while let Some(cause) = source {
                output.push_str(&format!("    Caused by: {}\n", cause));
                source = cause.source();
            }
        }

        output
    }

    /// Full stderr text for a failed run; argument errors also get the usage block.
    pub fn render(&self, error: &anyhow::Error) -> (String, i32) {
        match error.downcast_ref::<CliError>() {
            Some(cli) => {
                let mut text = self.format(cli);
                if cli.shows_usage() {
                    text.push_str(&usage_text());
                }
                (text, cli.exit_code())
            }
            None => {
                let chain: &(dyn Error + 'static) = error.as_ref();
                (self.format(chain), EXIT_USAGE)
            }
        }
    }

    /// Prints the error to stderr and returns the process exit code.
    pub fn report(&self, error: &anyhow::Error) -> i32 {
        let (text, code) = self.render(error);
        eprint!("{}", text);
        code
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
