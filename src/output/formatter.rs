// Sun Oct 18 2026 - Alex

use itertools::Itertools;
use std::io::{self, Write};

/// Renders per-signature counts as one line, e.g. `2,0,5`.
pub struct OutputFormatter {
    separator: String,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            separator: ",".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn format(&self, counts: &[usize]) -> String {
        format!("{}\n", counts.iter().join(&self.separator))
    }

    pub fn write<W: Write>(&self, out: &mut W, counts: &[usize]) -> io::Result<()> {
        out.write_all(self.format(counts).as_bytes())?;
        out.flush()
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
