// Property tests for Content-Digest round trip, order independence,
// tamper sensitivity and determinism

use cdigest_core::sfv::{encode_byte_sequences, parse_dictionary};
use cdigest_core::{create_content_digest_header, verify_content_digest, DigestAlgorithm};
use proptest::prelude::*;

fn algorithms() -> impl Strategy<Value = Vec<DigestAlgorithm>> {
    prop::collection::vec(
        prop::sample::select(DigestAlgorithm::ALL.to_vec()),
        1..4,
    )
}

const BASE64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

proptest! {
    #[test]
    fn prop_round_trip_verifies(body in prop::collection::vec(any::<u8>(), 0..512), algs in algorithms()) {
        let header = create_content_digest_header(Some(&body[..]), &algs).unwrap();
        prop_assert!(verify_content_digest(Some(&body[..]), &header).unwrap());
    }

    #[test]
    fn prop_creation_is_deterministic(body in ".*", algs in algorithms()) {
        let a = create_content_digest_header(Some(body.as_bytes()), &algs).unwrap();
        let b = create_content_digest_header(Some(body.as_bytes()), &algs).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_member_order_does_not_matter(body in prop::collection::vec(any::<u8>(), 0..256), reverse_first in any::<bool>()) {
        let header = create_content_digest_header(
            Some(&body[..]),
            &[DigestAlgorithm::Sha256, DigestAlgorithm::Sha512],
        )
        .unwrap();

        let dict = parse_dictionary(&header).unwrap();
        let mut members: Vec<(&str, &[u8])> = dict
            .members()
            .map(|(k, v)| (k, v.as_byte_sequence().unwrap()))
            .collect();
        if reverse_first {
            members.reverse();
        }
        let reordered_header = encode_byte_sequences(members);

        prop_assert_eq!(
            verify_content_digest(Some(&body[..]), &header).unwrap(),
            verify_content_digest(Some(&body[..]), &reordered_header).unwrap()
        );
    }

    #[test]
    fn prop_flipping_a_digest_character_fails(
        body in prop::collection::vec(any::<u8>(), 0..256),
        index in 0usize..40,
        replacement in prop::sample::select(BASE64_ALPHABET.to_vec()),
    ) {
        let header = create_content_digest_header(Some(&body[..]), &[DigestAlgorithm::Sha256]).unwrap();
        // "sha-256=:" prefix, then 44 base64 characters; the first 40 carry full bytes
        let pos = "sha-256=:".len() + index;
        let original = header.as_bytes()[pos];
        prop_assume!(original != replacement);

        let mut tampered = header.into_bytes();
        tampered[pos] = replacement;
        let tampered = String::from_utf8(tampered).unwrap();

        prop_assert!(!verify_content_digest(Some(&body[..]), &tampered).unwrap());
    }
}
