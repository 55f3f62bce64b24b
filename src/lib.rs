// Sun Oct 18 2026 - Alex

pub mod config;
pub mod memory;
pub mod output;
pub mod pattern;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use memory::BinaryBuffer;
pub use pattern::{Signature, SignatureMatcher, SignatureSet};
