//! Structured Field Dictionary codec
//!
//! The subset of Structured Field Values needed to carry named digests in a
//! single header value. Decoding recognizes any well-formed Dictionary;
//! encoding only writes byte sequence members.
//!
//! ## Wire form
//!
//! ```text
//! sha-256=:47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=:, sha-512=:...:
//! ```
//!
//! - Encode writes members in the order given, joined by `", "`.
//! - Decode preserves wire order and keeps duplicate keys; use
//!   [`Dictionary::get`] or [`Dictionary::deduplicated`] for the
//!   last-member-wins view.

pub mod model;
pub mod parser;
pub mod serializer;

pub use model::{BareItem, Dictionary, InnerList, Item, Parameters, StructuredItem};
pub use parser::parse_dictionary;
pub use serializer::encode_byte_sequences;
