// Sun Oct 18 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Exact(u8),
    Wildcard,
}

impl Cell {
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Self::Exact(b) => b == byte,
            Self::Wildcard => true,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }

    pub fn to_byte(self) -> Option<u8> {
        match self {
            Self::Exact(b) => Some(b),
            Self::Wildcard => None,
        }
    }
}

impl From<u8> for Cell {
    fn from(byte: u8) -> Self {
        Self::Exact(byte)
    }
}

/// A compiled search pattern. Always holds at least one cell and is never
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    cells: Vec<Cell>,
}

#[allow(clippy::len_without_is_empty)]
impl Signature {
    pub fn new(cells: Vec<Cell>) -> Result<Self, PatternError> {
        if cells.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { cells })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PatternError> {
        Self::new(bytes.iter().copied().map(Cell::Exact).collect())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Checks the cells against the start of `data`.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.cells.len() {
            return false;
        }

        self.cells
            .iter()
            .zip(data.iter())
            .all(|(cell, &byte)| cell.matches(byte))
    }

    /// Index and value of the first exact cell, used as a scan anchor.
    pub fn first_exact(&self) -> Option<(usize, u8)> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(i, cell)| cell.to_byte().map(|b| (i, b)))
    }

    pub fn exact_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_exact()).count()
    }

    pub fn wildcard_count(&self) -> usize {
        self.cells.len() - self.exact_count()
    }

    pub fn to_hex_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Exact(b) => format!("{:02X}", b),
                Cell::Wildcard => "??".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
