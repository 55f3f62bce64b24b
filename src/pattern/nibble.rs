// Sun Oct 18 2026 - Alex

/// Returned by [`decode`] for anything outside the hex alphabet.
pub const INVALID: u8 = 0xFF;

/// Maps one character to its hex value, or [`INVALID`].
///
/// Only the 7-bit ASCII digits `0-9`, `a-f` and `A-F` are accepted; NUL and
/// anything at or above 0x80 is rejected before range testing.
pub fn decode(ch: char) -> u8 {
    let code = ch as u32;
    if code == 0 || code >= 0x80 {
        return INVALID;
    }

    let c = code as u8;
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 0xa,
        b'A'..=b'F' => c - b'A' + 0xA,
        _ => INVALID,
    }
}

pub fn is_valid(ch: char) -> bool {
    decode(ch) != INVALID
}
