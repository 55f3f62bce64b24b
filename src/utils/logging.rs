// Sun Oct 18 2026 - Alex

use env_logger::Env;
use std::time::Instant;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "SIGGREP_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr logger. Safe to call more than once; later calls are
/// ignored.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .format_timestamp(None)
        .try_init()
        .ok();
}

pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}
