// Sun Oct 18 2026 - Alex

use crate::pattern::nibble::{self, INVALID};
use crate::pattern::{Cell, PatternError, Signature};
use std::fmt;

/// How a literal string is turned into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per character, code points above 0xFF are rejected.
    Narrow,
    /// Two bytes per UTF-16 code unit, low byte first.
    WideLe,
    /// Two bytes per UTF-16 code unit, high byte first.
    WideBe,
}

/// Which grammar a piece of signature text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Pattern,
    Literal(Encoding),
}

impl SignatureKind {
    pub const ALL: [SignatureKind; 4] = [
        SignatureKind::Pattern,
        SignatureKind::Literal(Encoding::Narrow),
        SignatureKind::Literal(Encoding::WideLe),
        SignatureKind::Literal(Encoding::WideBe),
    ];

    /// Command line flag name, without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Literal(Encoding::Narrow) => "narrow",
            Self::Literal(Encoding::WideLe) => "wide",
            Self::Literal(Encoding::WideBe) => "widebe",
        }
    }

    pub fn compile(self, text: &str) -> Result<Signature, PatternError> {
        match self {
            Self::Pattern => compile_hex_pattern(text),
            Self::Literal(encoding) => compile_literal(text, encoding),
        }
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.flag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AfterSpace,
    AfterFirst(u8),
    AfterSecond,
    AfterWildcard,
}

/// The C locale `isspace` set. Unicode spaces are not separators.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// One step of the hex pattern tokenizer. `None` rejects the whole pattern.
fn transition(state: State, ch: char) -> Option<(State, Option<Cell>)> {
    match state {
        State::AfterSpace => {
            if is_space(ch) {
                Some((State::AfterSpace, None))
            } else if ch == '?' {
                Some((State::AfterWildcard, Some(Cell::Wildcard)))
            } else {
                match nibble::decode(ch) {
                    INVALID => None,
                    high => Some((State::AfterFirst(high), None)),
                }
            }
        }
        State::AfterFirst(high) => match nibble::decode(ch) {
            INVALID => None,
            low => Some((State::AfterSecond, Some(Cell::Exact(high << 4 | low)))),
        },
        State::AfterSecond => is_space(ch).then_some((State::AfterSpace, None)),
        // Extra '?' in the same token do not add cells.
        State::AfterWildcard => {
            if is_space(ch) {
                Some((State::AfterSpace, None))
            } else if ch == '?' {
                Some((State::AfterWildcard, None))
            } else {
                None
            }
        }
    }
}

/// Compiles an IDA style pattern such as `"48 8B ? ? 89"`.
///
/// Every byte needs exactly two hex digits, a `?` token (or a run of them)
/// is a single wildcard byte, and tokens are separated by whitespace. Any
/// stray character fails the whole pattern, as does an empty one.
pub fn compile_hex_pattern(text: &str) -> Result<Signature, PatternError> {
    let mut state = State::AfterSpace;
    let mut cells = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        let (next, cell) =
            transition(state, ch).ok_or(PatternError::InvalidCharacter { position, ch })?;
        cells.extend(cell);
        state = next;
    }

    if let State::AfterFirst(_) = state {
        return Err(PatternError::DanglingNibble);
    }

    Signature::new(cells)
}

/// Compiles a literal string into exact cells using `encoding`.
pub fn compile_literal(text: &str, encoding: Encoding) -> Result<Signature, PatternError> {
    let bytes: Vec<u8> = match encoding {
        Encoding::Narrow => text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                u8::try_from(ch as u32).map_err(|_| PatternError::NarrowOutOfRange { position, ch })
            })
            .collect::<Result<_, _>>()?,
        Encoding::WideLe => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        Encoding::WideBe => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
    };

    Signature::from_bytes(&bytes)
}
