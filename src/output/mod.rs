// Sun Oct 18 2026 - Alex

pub mod formatter;

pub use formatter::OutputFormatter;
