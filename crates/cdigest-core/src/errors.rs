use cdigest_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using DigestError
pub type Result<T> = std::result::Result<T, DigestError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically and that the logging facility records as `err.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,

    // Header content
    UnsupportedAlgorithm,
    ParseError,
    InvalidDigestValue,

    // Integration
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnsupportedAlgorithm => "ERR_UNSUPPORTED_ALGORITHM",
            ExErrorKind::ParseError => "ERR_PARSE_ERROR",
            ExErrorKind::InvalidDigestValue => "ERR_INVALID_DIGEST_VALUE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus whatever context was known where the error
/// crossed an operation boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    algorithm: Option<String>,
    offset: Option<usize>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            algorithm: None,
            offset: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the algorithm key the error concerns
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Add the byte offset into the header value
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the algorithm key, if any
    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Get the byte offset, if any
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(algorithm) = &self.algorithm {
            write!(f, " (algorithm: {})", algorithm)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset: {})", offset)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for content digest operations
///
/// A digest mismatch is not an error: verification reports it as `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Algorithm identifier outside the supported set
    #[error("Unsupported digest algorithm {algorithm}.")]
    UnsupportedAlgorithm { algorithm: String },

    /// Header value does not match the dictionary grammar
    #[error("Parse error: {reason} at offset {offset}")]
    Parse { offset: usize, reason: String },

    /// Member parsed, but its value is not a plain byte sequence
    #[error("Invalid value for digest with algorithm key of '{algorithm}'")]
    InvalidDigestValue { algorithm: String },

    /// Construction was asked for zero digests
    #[error("At least one digest algorithm is required")]
    NoAlgorithms,
}

impl DigestError {
    /// Build a parse error at `offset`
    pub(crate) fn parse(offset: usize, reason: impl Into<String>) -> Self {
        DigestError::Parse {
            offset,
            reason: reason.into(),
        }
    }
}

/// Conversion from DigestError to ExError
///
/// Maps each domain error to its canonical kind, carrying the algorithm key
/// or parse offset along as structured context.
impl From<DigestError> for ExError {
    fn from(err: DigestError) -> Self {
        let message = err.to_string();
        match err {
            DigestError::UnsupportedAlgorithm { algorithm } => {
                ExError::new(ExErrorKind::UnsupportedAlgorithm)
                    .with_algorithm(algorithm)
                    .with_message(message)
            }
            DigestError::Parse { offset, .. } => ExError::new(ExErrorKind::ParseError)
                .with_offset(offset)
                .with_message(message),
            DigestError::InvalidDigestValue { algorithm } => {
                ExError::new(ExErrorKind::InvalidDigestValue)
                    .with_algorithm(algorithm)
                    .with_message(message)
            }
            DigestError::NoAlgorithms => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_algorithm_message_shape() {
        let err = DigestError::UnsupportedAlgorithm {
            algorithm: "md5".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported digest algorithm md5.");
    }

    #[test]
    fn test_parse_error_message_prefix() {
        let err = DigestError::parse(7, "expected ':'");
        assert!(err.to_string().starts_with("Parse error"));
        assert!(err.to_string().contains("offset 7"));
    }

    #[test]
    fn test_ex_error_source_chain() {
        let inner = ExError::new(ExErrorKind::ParseError).with_message("bad byte sequence");
        let outer = ExError::new(ExErrorKind::Io)
            .with_op("read_body")
            .with_source(inner);

        let source = std::error::Error::source(&outer).expect("source should be set");
        assert!(source.to_string().contains("ERR_PARSE_ERROR"));
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::ParseError)
        );
    }
}
