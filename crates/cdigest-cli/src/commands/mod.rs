pub mod create;
pub mod verify;

use cdigest_core::errors::{ExError, ExErrorKind};
use std::io::Read;
use std::path::Path;

/// Read the message body from `path`, or from stdin when no path is given
///
/// # Errors
///
/// Returns an `Io` error if the file or stdin cannot be read.
pub fn read_body(path: Option<&Path>) -> Result<Vec<u8>, ExError> {
    let io_error = |e: std::io::Error| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_body")
            .with_message(e.to_string())
    };

    match path {
        Some(path) => std::fs::read(path).map_err(io_error),
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut body)
                .map_err(io_error)?;
            Ok(body)
        }
    }
}
