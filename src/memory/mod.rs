// Sun Oct 18 2026 - Alex

pub mod binary;
pub mod error;

pub use binary::BinaryBuffer;
pub use error::MemoryError;
