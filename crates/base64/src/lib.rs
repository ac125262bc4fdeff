//! Base64 encoding and decoding.
//!
//! This crate implements the RFC 4648 standard alphabet (`+` and `/`) with
//! `=` padding and no line wrapping. Each call returns one freshly allocated,
//! owned buffer; allocation failure is reported as an error rather than an
//! abort.
//!
//! # Example
//!
//! ```
//! use plain_base64::{decode, encode};
//!
//! let data = b"Many hands make light work.";
//! let encoded = encode(data).unwrap();
//! assert_eq!(encoded, "TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decoded_len};
pub use encode::{encode, encode_to_vec, encoded_len};

use thiserror::Error;

/// Error type for base64 operations.
///
/// Every variant means the same thing to a caller that does not care why:
/// no buffer was produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// Nothing to encode or decode.
    #[error("input is empty")]
    EmptyInput,
    /// The encoded text length is not a multiple of 4.
    #[error("base64 string length {0} is not a multiple of 4")]
    InvalidLength(usize),
    /// A byte outside `[A-Za-z0-9+/=]` was found in the encoded text.
    #[error("invalid base64 byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
    /// The output buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for output")]
    AllocationFailed { requested: usize },
    /// The output length does not fit in `usize`.
    #[error("output length overflows usize")]
    CapacityOverflow,
}

/// Coarse category of a [`Base64Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty input, or encoded text of an impossible length.
    InvalidShape,
    /// Encoded text containing a byte outside the alphabet.
    InvalidContent,
    /// The output buffer could not be obtained.
    ResourceExhausted,
}

impl Base64Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Base64Error::EmptyInput | Base64Error::InvalidLength(_) => ErrorKind::InvalidShape,
            Base64Error::InvalidByte { .. } => ErrorKind::InvalidContent,
            Base64Error::AllocationFailed { .. } | Base64Error::CapacityOverflow => {
                ErrorKind::ResourceExhausted
            }
        }
    }
}
