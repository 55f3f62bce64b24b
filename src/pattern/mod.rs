// Sun Oct 18 2026 - Alex

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod nibble;
pub mod pattern_set;
pub mod signature;

pub use compiler::{compile_hex_pattern, compile_literal, Encoding, SignatureKind};
pub use error::PatternError;
pub use matcher::{count, SignatureMatcher};
pub use pattern_set::SignatureSet;
pub use signature::{Cell, Signature};
