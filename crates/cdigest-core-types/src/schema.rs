//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the logging macros,
//! the test capture layer and anything that consumes the JSON log stream.

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_CREATE: &str = "content_digest_create";
pub const OP_VERIFY: &str = "content_digest_verify";
