//! Digest engine
//!
//! Hashes a message body with one or more registered algorithms and
//! encodes the results as a Content-Digest dictionary; verifies a body
//! against such a dictionary.
//!
//! | Key       | Algorithm | Digest length |
//! |-----------|-----------|---------------|
//! | `sha-256` | SHA-256   | 32 bytes      |
//! | `sha-512` | SHA-512   | 64 bytes      |

pub mod algorithm;
pub mod header;

pub use algorithm::DigestAlgorithm;
pub use header::{
    check_content_digest, create_content_digest_header, verify_content_digest, DigestCheck,
};
