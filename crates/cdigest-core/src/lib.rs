//! cdigest core - HTTP Content-Digest construction and verification
//!
//! This crate provides:
//! - A Structured Field Dictionary codec limited to what a digest header needs
//! - The digest engine: build a header for a body, verify a body against one
//! - The error facility (`DigestError`, `ExError`, stable `ERR_*` codes)
//! - The structured logging facility and its test capture mode
//!
//! ```
//! use cdigest_core::{create_content_digest_header, verify_content_digest, DigestAlgorithm};
//!
//! let body = br#"{"hello":"world"}"#;
//! let header = create_content_digest_header(
//!     Some(&body[..]),
//!     &[DigestAlgorithm::Sha256, DigestAlgorithm::Sha512],
//! )
//! .unwrap();
//! assert!(verify_content_digest(Some(&body[..]), &header).unwrap());
//! ```

pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod sfv;

pub use cdigest_core_types as core_types;

// Re-export commonly used types
pub use digest::{
    check_content_digest, create_content_digest_header, verify_content_digest, DigestAlgorithm,
    DigestCheck,
};
pub use errors::{DigestError, ExError, ExErrorKind, Result};
