use thiserror::Error;

/// Result type alias using SchemaError
pub type Result<T> = std::result::Result<T, SchemaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the library can report maps onto one of these kinds, and
/// each kind has a stable `ERR_*` code suitable for CLI output and tests.
/// Comparison itself never fails; these kinds cover loading schemas,
/// parsing policy files and the I/O around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Loading
    /// Input text is not JSON, or the root is not a schema
    InvalidDocument,
    /// A `patternProperties` key is not a valid regular expression
    InvalidPattern,
    /// Schema nesting exceeds the loader's depth limit
    NestingTooDeep,
    /// `$schema` names a draft this library does not recognise
    UnknownDraftVersion,

    // Policy
    /// A policy file is malformed
    InvalidPolicy,
    /// A policy names a difference kind that does not exist
    UnknownDifferenceKind,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidPattern => "ERR_INVALID_PATTERN",
            ExErrorKind::NestingTooDeep => "ERR_NESTING_TOO_DEEP",
            ExErrorKind::UnknownDraftVersion => "ERR_UNKNOWN_DRAFT_VERSION",
            ExErrorKind::InvalidPolicy => "ERR_INVALID_POLICY",
            ExErrorKind::UnknownDifferenceKind => "ERR_UNKNOWN_DIFFERENCE_KIND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error
///
/// Carries a kind plus optional context: the operation that failed and the
/// JSON pointer into the schema document where the problem was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    pointer: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            pointer: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the JSON pointer of the offending schema location
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
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

    /// Get the schema pointer context, if any
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
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
        if let Some(pointer) = &self.pointer {
            write!(f, " (at: {})", pointer)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== Library Errors ==========

/// Errors raised while loading schemas or policies
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Invalid JSON schema: {message}")]
    InvalidDocument { message: String },

    #[error("Invalid pattern '{pattern}' at {pointer}: {message}")]
    InvalidPattern {
        pointer: String,
        pattern: String,
        message: String,
    },

    #[error("Schema nesting at {pointer} exceeds the limit of {limit} levels")]
    NestingTooDeep { pointer: String, limit: usize },

    #[error("Unknown draft version: {name}")]
    UnknownDraftVersion { name: String },

    #[error("Invalid policy: {message}")]
    InvalidPolicy { message: String },

    #[error("Unknown difference kind: {name}")]
    UnknownDifferenceKind { name: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<SchemaError> for ExError {
    fn from(err: SchemaError) -> Self {
        let message = err.to_string();
        match err {
            SchemaError::InvalidDocument { .. } => {
                ExError::new(ExErrorKind::InvalidDocument).with_message(message)
            }
            SchemaError::InvalidPattern { pointer, .. } => ExError::new(ExErrorKind::InvalidPattern)
                .with_op("load_schema")
                .with_pointer(pointer)
                .with_message(message),
            SchemaError::NestingTooDeep { pointer, .. } => ExError::new(ExErrorKind::NestingTooDeep)
                .with_op("load_schema")
                .with_pointer(pointer)
                .with_message(message),
            SchemaError::UnknownDraftVersion { .. } => {
                ExError::new(ExErrorKind::UnknownDraftVersion).with_message(message)
            }
            SchemaError::InvalidPolicy { .. } => ExError::new(ExErrorKind::InvalidPolicy)
                .with_op("load_policy")
                .with_message(message),
            SchemaError::UnknownDifferenceKind { .. } => {
                ExError::new(ExErrorKind::UnknownDifferenceKind).with_message(message)
            }
            SchemaError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            SchemaError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SchemaError
impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::InvalidPolicy {
            message: err.message().to_string(),
        }
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io {
            message: err.to_string(),
        }
    }
}
