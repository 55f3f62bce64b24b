// Sun Oct 18 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Signature is empty")]
    Empty,
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { position: usize, ch: char },
    #[error("Pattern ends with an incomplete byte")]
    DanglingNibble,
    #[error("Character {ch:?} at position {position} does not fit in a narrow byte")]
    NarrowOutOfRange { position: usize, ch: char },
}
