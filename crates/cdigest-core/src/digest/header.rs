//! Content-Digest header construction and verification
//!
//! ## Logging Ownership
//!
//! The public operations here own boundary logging (`log_op_start!`,
//! `log_op_end!`, `log_op_error!`). The codec underneath only emits
//! `tracing::debug!` detail.
//!
//! ## Outcomes
//!
//! Verification has two normal results, `true` and `false`. Structural
//! problems (unparseable header, non-byte-sequence member, unknown
//! algorithm) are errors and abort the whole call.

use serde::Serialize;
use std::time::Instant;

use super::algorithm::DigestAlgorithm;
use crate::core_types::schema::{OP_CREATE, OP_VERIFY};
use crate::errors::{DigestError, Result};
use crate::sfv::{encode_byte_sequences, parse_dictionary};
use crate::{log_op_end, log_op_error, log_op_start};

/// Outcome of checking one header member against the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestCheck {
    pub algorithm: DigestAlgorithm,
    pub matched: bool,
}

/// Build a Content-Digest header value for `body`
///
/// `None` and an empty body hash identically. Algorithms may be given as
/// [`DigestAlgorithm`] values or as raw identifiers; members are written in
/// the order given.
///
/// ```
/// use cdigest_core::digest::{create_content_digest_header, DigestAlgorithm};
///
/// let header = create_content_digest_header(None, &[DigestAlgorithm::Sha256]).unwrap();
/// assert_eq!(header, "sha-256=:47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=:");
/// ```
///
/// # Errors
///
/// - `UnsupportedAlgorithm` for the first identifier outside the supported
///   set; nothing is hashed in that case.
/// - `NoAlgorithms` if `algorithms` is empty.
pub fn create_content_digest_header<A: AsRef<str>>(
    body: Option<&[u8]>,
    algorithms: &[A],
) -> Result<String> {
    log_op_start!(OP_CREATE, algorithm_count = algorithms.len());
    let start = Instant::now();

    let header = create_impl(body.unwrap_or_default(), algorithms).map_err(|e| {
        log_op_error!(
            OP_CREATE,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_CREATE,
        duration_ms = start.elapsed().as_millis() as u64,
        header_len = header.len()
    );

    Ok(header)
}

fn create_impl<A: AsRef<str>>(body: &[u8], algorithms: &[A]) -> Result<String> {
    if algorithms.is_empty() {
        return Err(DigestError::NoAlgorithms);
    }

    let resolved = algorithms
        .iter()
        .map(|a| a.as_ref().parse::<DigestAlgorithm>())
        .collect::<Result<Vec<_>>>()?;

    Ok(encode_byte_sequences(
        resolved.iter().map(|a| (a.as_str(), a.digest(body))),
    ))
}

/// Verify `body` against a Content-Digest header value
///
/// Returns `true` only if every member matches; an empty header verifies
/// as `true`. Member order does not affect the result. A key that appears
/// more than once is checked against its last value only.
///
/// # Errors
///
/// - `Parse` if the header is not a well-formed dictionary.
/// - `InvalidDigestValue` if a member is an inner list or not a byte sequence.
/// - `UnsupportedAlgorithm` if a member key is not a supported algorithm.
pub fn verify_content_digest(body: Option<&[u8]>, header: &str) -> Result<bool> {
    log_op_start!(OP_VERIFY, header_len = header.len());
    let start = Instant::now();

    let verified = check_impl(body.unwrap_or_default(), header)
        .map(|checks| checks.iter().all(|c| c.matched))
        .map_err(|e| {
            log_op_error!(
                OP_VERIFY,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        OP_VERIFY,
        duration_ms = start.elapsed().as_millis() as u64,
        verified = verified
    );

    Ok(verified)
}

/// Check every header member against `body`, one result per distinct key
///
/// Duplicate keys resolve last-member-wins and report at the position of
/// their first appearance.
///
/// # Errors
///
/// Same as [`verify_content_digest`]; an error on any member discards the
/// results for all others.
pub fn check_content_digest(body: Option<&[u8]>, header: &str) -> Result<Vec<DigestCheck>> {
    check_impl(body.unwrap_or_default(), header)
}

fn check_impl(body: &[u8], header: &str) -> Result<Vec<DigestCheck>> {
    let dict = parse_dictionary(header)?.deduplicated();

    dict.members()
        .map(|(key, value)| {
            let Some(expected) = value.as_byte_sequence() else {
                tracing::debug!(
                    algorithm = key,
                    inner_list = value.is_inner_list(),
                    "member is not a byte sequence"
                );
                return Err(DigestError::InvalidDigestValue {
                    algorithm: key.to_string(),
                });
            };
            let algorithm: DigestAlgorithm = key.parse()?;
            let matched =
                expected.len() == algorithm.output_len() && algorithm.digest(body) == expected;
            tracing::debug!(algorithm = %algorithm, matched, "checked digest member");
            Ok(DigestCheck { algorithm, matched })
        })
        .collect()
}
