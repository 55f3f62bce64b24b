// Sun Oct 18 2026 - Alex

pub mod cli;
pub mod errors;

pub use cli::{Args, CommandHandler};
pub use errors::{CliError, ErrorDisplay};
