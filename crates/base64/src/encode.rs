//! Standard base64 encoding.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::Base64Error;

/// Returns the encoded length of `length` input bytes: `4 * ceil(length / 3)`.
///
/// Returns `None` if the result does not fit in `usize`.
///
/// # Example
///
/// ```
/// use plain_base64::encoded_len;
///
/// assert_eq!(encoded_len(1), Some(4));
/// assert_eq!(encoded_len(3), Some(4));
/// assert_eq!(encoded_len(4), Some(8));
/// ```
pub fn encoded_len(length: usize) -> Option<usize> {
    let groups = length / 3 + usize::from(length % 3 != 0);
    groups.checked_mul(4)
}

/// Encodes bytes to a standard base64 string with padding.
///
/// # Errors
///
/// * [`Base64Error::EmptyInput`] if `data` is empty.
/// * [`Base64Error::CapacityOverflow`] or [`Base64Error::AllocationFailed`]
///   if the output buffer cannot be obtained.
///
/// # Example
///
/// ```
/// use plain_base64::encode;
///
/// assert_eq!(encode(b"Many hands make light work.").unwrap(), "TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu");
/// assert_eq!(encode("light work").unwrap(), "bGlnaHQgd29yaw==");
/// assert!(encode(b"").is_err());
/// ```
pub fn encode<T: AsRef<[u8]>>(data: T) -> Result<String, Base64Error> {
    let data = data.as_ref();
    let length = output_len(data)?;

    let mut out = String::new();
    out.try_reserve_exact(length)
        .map_err(|_| allocation_failed(length))?;
    encode_groups(data, |quad| {
        for &symbol in &quad {
            out.push(symbol as char);
        }
    });

    trace!("encoded {} bytes into {} symbols", data.len(), out.len());
    Ok(out)
}

/// Encodes bytes to standard base64, returning the ASCII symbols as bytes.
///
/// Fails under the same conditions as [`encode`].
///
/// # Example
///
/// ```
/// use plain_base64::encode_to_vec;
///
/// assert_eq!(encode_to_vec(b"A").unwrap(), b"QQ==");
/// ```
pub fn encode_to_vec<T: AsRef<[u8]>>(data: T) -> Result<Vec<u8>, Base64Error> {
    let data = data.as_ref();
    let length = output_len(data)?;

    let mut out = Vec::new();
    out.try_reserve_exact(length)
        .map_err(|_| allocation_failed(length))?;
    encode_groups(data, |quad| out.extend_from_slice(&quad));

    trace!("encoded {} bytes into {} symbols", data.len(), out.len());
    Ok(out)
}

fn output_len(data: &[u8]) -> Result<usize, Base64Error> {
    if data.is_empty() {
        debug!("refusing to encode empty input");
        return Err(Base64Error::EmptyInput);
    }
    encoded_len(data.len()).ok_or_else(|| {
        debug!("encoded length of {} bytes overflows usize", data.len());
        Base64Error::CapacityOverflow
    })
}

fn allocation_failed(requested: usize) -> Base64Error {
    debug!("could not allocate {} bytes for encoded output", requested);
    Base64Error::AllocationFailed { requested }
}

/// Feeds `emit` one four-symbol group per three input bytes.
///
/// Missing bytes in the final group count as zero; the symbols they would
/// have produced are replaced by padding.
fn encode_groups(data: &[u8], mut emit: impl FnMut([u8; 4])) {
    for group in data.chunks(3) {
        let octet1 = group[0] as u32;
        let octet2 = group.get(1).copied().unwrap_or(0) as u32;
        let octet3 = group.get(2).copied().unwrap_or(0) as u32;
        let concatenated = (octet1 << 16) | (octet2 << 8) | octet3;

        emit([
            ALPHABET_BYTES[((concatenated >> 18) & 0x3f) as usize],
            ALPHABET_BYTES[((concatenated >> 12) & 0x3f) as usize],
            if group.len() > 1 {
                ALPHABET_BYTES[((concatenated >> 6) & 0x3f) as usize]
            } else {
                PAD_BYTE
            },
            if group.len() > 2 {
                ALPHABET_BYTES[(concatenated & 0x3f) as usize]
            } else {
                PAD_BYTE
            },
        ]);
    }
}
