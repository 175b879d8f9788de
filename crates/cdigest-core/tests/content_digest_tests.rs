// Known-vector tests for Content-Digest construction and verification

use cdigest_core::{
    create_content_digest_header, verify_content_digest, DigestAlgorithm, DigestError,
};

const BODY: &str = r#"{hello:"world"}"#;
const GOODBYE: &str = r#"{goodbye:"world"}"#;

const EMPTY_SHA256: &str = "sha-256=:47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=:";
const EMPTY_SHA512: &str = "sha-512=:z4PhNX7vuL3xVChQ1m2AB9Yg5AULVxXcg/SpIdNs6c5H0NE8XYXysP+DGNKHfuwvY7kxvUdBeoGlODJ6+SfaPg==:";
const BODY_SHA256: &str = "sha-256=:LsWDvMD3TQ5hD1FciIKL6ePw7YR8BVI5dD6NnJwusRs=:";
const BODY_SHA512: &str = "sha-512=:YwRB5Y5G6jIfS1V0gBi59+hVKgu+vFjZKmeXdqMQQjwrwh5hA0vNbwDQi30SCiOK+e2dRs3P4tMo72WT3BfmQg==:";

fn body(s: &str) -> Option<&[u8]> {
    Some(s.as_bytes())
}

// ===== Construction =====

#[test]
fn test_create_sha256_empty_body() {
    let header = create_content_digest_header(None, &["sha-256"]).unwrap();
    assert_eq!(header, EMPTY_SHA256);
}

#[test]
fn test_create_sha512_empty_body() {
    let header = create_content_digest_header(None, &["sha-512"]).unwrap();
    assert_eq!(header, EMPTY_SHA512);
}

#[test]
fn test_create_sha256_body() {
    let header = create_content_digest_header(body(BODY), &[DigestAlgorithm::Sha256]).unwrap();
    assert_eq!(header, BODY_SHA256);
}

#[test]
fn test_create_sha512_body() {
    let header = create_content_digest_header(body(BODY), &[DigestAlgorithm::Sha512]).unwrap();
    assert_eq!(header, BODY_SHA512);
}

#[test]
fn test_create_multiple_empty_body() {
    let header = create_content_digest_header(None, &["sha-256", "sha-512"]).unwrap();
    assert_eq!(header, format!("{}, {}", EMPTY_SHA256, EMPTY_SHA512));
}

#[test]
fn test_create_multiple_body() {
    let header = create_content_digest_header(body(BODY), &["sha-256", "sha-512"]).unwrap();
    assert_eq!(header, format!("{}, {}", BODY_SHA256, BODY_SHA512));
}

#[test]
fn test_create_follows_requested_order() {
    let header = create_content_digest_header(body(BODY), &["sha-512", "sha-256"]).unwrap();
    assert_eq!(header, format!("{}, {}", BODY_SHA512, BODY_SHA256));
}

#[test]
fn test_create_empty_body_equivalence() {
    let absent = create_content_digest_header(None, &["sha-256"]).unwrap();
    let empty = create_content_digest_header(body(""), &["sha-256"]).unwrap();
    assert_eq!(absent, empty);
}

#[test]
fn test_create_rejects_unknown_algorithm() {
    let err = create_content_digest_header(body(""), &["nonsense"]).unwrap_err();
    assert!(matches!(err, DigestError::UnsupportedAlgorithm { .. }));
    assert!(err.to_string().starts_with("Unsupported digest algorithm"));
    assert!(err.to_string().contains("nonsense"));
}

// ===== Verification =====

#[test]
fn test_verify_sha256() {
    assert!(verify_content_digest(body(BODY), BODY_SHA256).unwrap());
}

#[test]
fn test_verify_sha256_empty_body() {
    assert!(verify_content_digest(None, EMPTY_SHA256).unwrap());
}

#[test]
fn test_verify_sha512() {
    assert!(verify_content_digest(body(BODY), BODY_SHA512).unwrap());
}

#[test]
fn test_verify_rejects_other_body_sha256() {
    assert!(!verify_content_digest(body(GOODBYE), BODY_SHA256).unwrap());
}

#[test]
fn test_verify_rejects_other_body_sha512() {
    assert!(!verify_content_digest(body(GOODBYE), BODY_SHA512).unwrap());
}

#[test]
fn test_verify_two_digests() {
    let header = format!("{}, {}", BODY_SHA256, BODY_SHA512);
    assert!(verify_content_digest(body(BODY), &header).unwrap());
}

#[test]
fn test_verify_two_digests_any_order() {
    let header = format!("{}, {}", BODY_SHA512, BODY_SHA256);
    assert!(verify_content_digest(body(BODY), &header).unwrap());
}

#[test]
fn test_verify_fails_if_any_digest_fails() {
    let tampered = BODY_SHA512.replacen(":Y", ":Z", 1);
    let header = format!("{}, {}", tampered, BODY_SHA256);
    assert!(!verify_content_digest(body(BODY), &header).unwrap());
}

#[test]
fn test_verify_empty_header_is_true() {
    assert!(verify_content_digest(body(BODY), "").unwrap());
}

#[test]
fn test_verify_unknown_algorithm_errors() {
    let header = BODY_SHA512.replace("sha-512", "md5");
    let err = verify_content_digest(body(BODY), &header).unwrap_err();
    assert_eq!(
        err,
        DigestError::UnsupportedAlgorithm {
            algorithm: "md5".to_string()
        }
    );
    assert!(err.to_string().starts_with("Unsupported digest algorithm"));
}

#[test]
fn test_verify_string_value_is_invalid_digest_value() {
    let err = verify_content_digest(body(""), r#"sha-256="NOT A HASH""#).unwrap_err();
    assert_eq!(
        err,
        DigestError::InvalidDigestValue {
            algorithm: "sha-256".to_string()
        }
    );
    assert!(err.to_string().starts_with("Invalid value for digest"));
    assert!(err.to_string().contains("'sha-256'"));
}

#[test]
fn test_verify_inner_list_is_invalid_digest_value() {
    let header = "sha-256=(:47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=:)";
    let err = verify_content_digest(None, header).unwrap_err();
    assert!(matches!(err, DigestError::InvalidDigestValue { .. }));
}

#[test]
fn test_verify_bare_key_is_invalid_digest_value() {
    let err = verify_content_digest(None, "sha-256").unwrap_err();
    assert!(matches!(err, DigestError::InvalidDigestValue { .. }));
}

#[test]
fn test_verify_missing_colons_is_parse_error() {
    let err = verify_content_digest(
        body(""),
        "sha-256=LsWDvMD3TQ5hD1FciIKL6ePw7YR8BVI5dD6NnJwusRs=",
    )
    .unwrap_err();
    assert!(matches!(err, DigestError::Parse { .. }));
    assert!(err.to_string().starts_with("Parse error"));
}

#[test]
fn test_verify_duplicate_key_last_member_wins() {
    let stale_then_good = format!("sha-256=:AAAA:, {}", BODY_SHA256);
    assert!(verify_content_digest(body(BODY), &stale_then_good).unwrap());

    let good_then_stale = format!("{}, sha-256=:AAAA:", BODY_SHA256);
    assert!(!verify_content_digest(body(BODY), &good_then_stale).unwrap());
}

#[test]
fn test_verify_accepts_unpadded_base64() {
    // Values are compared as decoded bytes, not as base64 text
    let unpadded = BODY_SHA256.replace("=:", ":").replacen("sha-256:", "sha-256=:", 1);
    assert_eq!(unpadded, "sha-256=:LsWDvMD3TQ5hD1FciIKL6ePw7YR8BVI5dD6NnJwusRs:");
    assert!(verify_content_digest(body(BODY), &unpadded).unwrap());
}

#[test]
fn test_verify_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let header = format!("{}, {}", BODY_SHA256, BODY_SHA512);
                verify_content_digest(body(BODY), &header).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
