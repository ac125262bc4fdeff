//! Standard base64 decoding.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::constants::{is_symbol, sextet, PAD_BYTE};
use crate::Base64Error;

/// Returns the number of bytes `encoded` decodes to.
///
/// Every four symbols carry three bytes, less one for each `=` among the
/// final two symbols. Returns `None` if `encoded` is empty or its length is
/// not a multiple of 4. The symbols themselves are not validated.
///
/// # Example
///
/// ```
/// use plain_base64::decoded_len;
///
/// assert_eq!(decoded_len("Zm9v"), Some(3));
/// assert_eq!(decoded_len("Zm8="), Some(2));
/// assert_eq!(decoded_len("Zg=="), Some(1));
/// assert_eq!(decoded_len("Zg="), None);
/// ```
pub fn decoded_len<T: AsRef<[u8]>>(encoded: T) -> Option<usize> {
    let encoded = encoded.as_ref();
    let length = encoded.len();
    if length == 0 || length % 4 != 0 {
        return None;
    }
    let padding = encoded[length - 2..]
        .iter()
        .filter(|&&b| b == PAD_BYTE)
        .count();
    Some(length / 4 * 3 - padding)
}

/// Decodes standard base64 text into bytes.
///
/// Accepts anything byte-like: `&str`, `String`, `&[u8]`, `Vec<u8>`.
/// The whole input is checked against `[A-Za-z0-9+/=]` before any decoding
/// happens.
///
/// # Errors
///
/// * [`Base64Error::EmptyInput`] if `encoded` is empty.
/// * [`Base64Error::InvalidByte`] for the first byte outside the alphabet.
/// * [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// * [`Base64Error::AllocationFailed`] if the output buffer cannot be obtained.
///
/// # Example
///
/// ```
/// use plain_base64::decode;
///
/// assert_eq!(decode("TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu").unwrap(), b"Many hands make light work.");
/// assert_eq!(decode("QQ==").unwrap(), b"A");
/// assert!(decode("QQ=").is_err());
/// assert!(decode("QQ!=").is_err());
/// ```
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, Base64Error> {
    let encoded = encoded.as_ref();
    if encoded.is_empty() {
        debug!("refusing to decode empty input");
        return Err(Base64Error::EmptyInput);
    }

    if let Some(offset) = encoded.iter().position(|&b| !is_symbol(b)) {
        let byte = encoded[offset];
        debug!("invalid base64 byte {:#04x} at offset {}", byte, offset);
        return Err(Base64Error::InvalidByte { offset, byte });
    }

    let length = decoded_len(encoded).ok_or_else(|| {
        debug!("base64 length {} is not a multiple of 4", encoded.len());
        Base64Error::InvalidLength(encoded.len())
    })?;

    let mut out = Vec::new();
    out.try_reserve_exact(length).map_err(|_| {
        debug!("could not allocate {} bytes for decoded output", length);
        Base64Error::AllocationFailed { requested: length }
    })?;

    for group in encoded.chunks_exact(4) {
        let concatenated = (sextet(group[0]) << 18)
            | (sextet(group[1]) << 12)
            | (sextet(group[2]) << 6)
            | sextet(group[3]);

        // Bytes past `length` only carry padding bits.
        for octet in [(concatenated >> 16) as u8, (concatenated >> 8) as u8, concatenated as u8] {
            if out.len() < length {
                out.push(octet);
            }
        }
        if out.len() == length {
            break;
        }
    }

    trace!("decoded {} symbols into {} bytes", encoded.len(), out.len());
    Ok(out)
}
