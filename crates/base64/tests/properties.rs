//! Property tests for the codec.

use plain_base64::{decode, decoded_len, encode, encoded_len, Base64Error, ALPHABET_BYTES};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let encoded = encode(&data).unwrap();
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded_len(&encoded), Some(data.len()));
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn encoded_length_formula(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let n = data.len();
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(encoded.len(), 4 * ((n + 2) / 3));
        prop_assert_eq!(Some(encoded.len()), encoded_len(n));
    }

    #[test]
    fn padding_placement(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let encoded = encode(&data).unwrap();
        let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        let expected = match data.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        prop_assert_eq!(padding, expected);
        prop_assert!(!encoded[..encoded.len() - padding].contains('='));
    }

    #[test]
    fn symbols_map_back_to_sextets(data in proptest::collection::vec(any::<u8>(), 1..256)) {
        let encoded = encode(&data).unwrap();
        let bit = |i: usize| data.get(i / 8).map_or(0, |&b| (b >> (7 - i % 8)) & 1);
        for (k, symbol) in encoded.bytes().enumerate().filter(|&(_, b)| b != b'=') {
            let sextet = (0..6).fold(0usize, |acc, j| (acc << 1) | bit(k * 6 + j) as usize);
            let value = ALPHABET_BYTES.iter().position(|&s| s == symbol).unwrap();
            prop_assert_eq!(value, sextet);
        }
    }

    #[test]
    fn rejects_lengths_not_multiple_of_four(text in "[A-Za-z0-9+/]{1,64}") {
        prop_assume!(text.len() % 4 != 0);
        prop_assert_eq!(decode(&text), Err(Base64Error::InvalidLength(text.len())));
    }

    #[test]
    fn rejects_foreign_bytes(
        prefix in "([A-Za-z0-9+/]{4}){0,8}",
        bad in any::<u8>().prop_filter("outside alphabet", |b| {
            !(b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/' || *b == b'=')
        }),
    ) {
        let mut text = prefix.clone().into_bytes();
        text.push(bad);
        text.extend_from_slice(b"AAA");
        prop_assert_eq!(
            decode(&text),
            Err(Base64Error::InvalidByte { offset: prefix.len(), byte: bad })
        );
    }
}
