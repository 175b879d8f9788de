//! Core types shared across the cdigest facilities
//!
//! This crate is the leaf of the workspace. It holds the pieces that both the
//! logging facility and the error facility need to agree on:
//!
//! - **Correlation**: `RequestId` for tying log events and errors to one call,
//!   `TraceId` for a caller-supplied trace spanning several calls
//! - **Schema constants**: canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestId, TraceId};
