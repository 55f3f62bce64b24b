// Sun Oct 18 2026 - Alex

pub mod args;
pub mod handler;

pub use args::Args;
pub use handler::CommandHandler;

use std::io;

pub fn run() -> anyhow::Result<()> {
    let handler = CommandHandler::new();
    let stdout = io::stdout();
    handler.execute(std::env::args_os(), &mut stdout.lock())
}
