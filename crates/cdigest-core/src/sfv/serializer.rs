//! Dictionary serializer
//!
//! Only byte sequence members with empty parameters are ever written. Keys
//! come from the closed algorithm set, so serialization cannot fail.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode `(key, bytes)` pairs as a dictionary of byte sequence items
///
/// Members appear in input order, joined with `", "`.
///
/// ```
/// use cdigest_core::sfv::encode_byte_sequences;
///
/// let header = encode_byte_sequences([("sha-256", &[1u8, 2, 3][..])]);
/// assert_eq!(header, "sha-256=:AQID:");
/// ```
pub fn encode_byte_sequences<K, V, I>(pairs: I) -> String
where
    K: AsRef<str>,
    V: AsRef<[u8]>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut out = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key.as_ref());
        out.push_str("=:");
        out.push_str(&STANDARD.encode(value.as_ref()));
        out.push(':');
    }
    out
}
