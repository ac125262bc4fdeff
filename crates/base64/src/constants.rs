//! Alphabet tables shared by the encoder and the decoder.

/// Standard base64 alphabet (RFC 4648, Table 1).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array, indexed by sextet value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Lowest symbol code in the alphabet (`'+'`); the inverse table starts here.
const DECODE_OFFSET: u8 = b'+';

/// Marks inverse table slots that no alphabet symbol maps to.
const INVALID: u8 = 255;

/// Inverse lookup table: `symbol - '+'` to sextet value.
/// Covers `'+'` (43) through `'z'` (122).
static DECODE_TABLE: [u8; 80] = {
    let mut table = [INVALID; 80];
    let mut i = 0;
    while i < 64 {
        table[(ALPHABET_BYTES[i] - DECODE_OFFSET) as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns true if `byte` may appear in encoded text: `[A-Za-z0-9+/=]`.
#[inline]
pub(crate) fn is_symbol(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' | PAD_BYTE)
}

/// Maps a symbol to its sextet. Padding maps to 0.
///
/// Callers must have run `is_symbol` over the input first.
#[inline]
pub(crate) fn sextet(symbol: u8) -> u32 {
    if symbol == PAD_BYTE {
        return 0;
    }
    debug_assert!(is_symbol(symbol));
    DECODE_TABLE[(symbol - DECODE_OFFSET) as usize] as u32
}
