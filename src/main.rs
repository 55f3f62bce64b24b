// Sun Oct 18 2026 - Alex

use siggrep::ui::{cli, ErrorDisplay};

fn main() {
    if let Err(err) = cli::run() {
        let code = ErrorDisplay::new().report(&err);
        std::process::exit(code);
    }
}
