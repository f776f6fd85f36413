use gengrid_core_types::schema::{OP_BUILD_GRID_SPEC, OP_EMIT_GRID, OP_RESOLVE_DIMENSION};
use thiserror::Error;

/// Result type alias using GenGridError
pub type Result<T> = std::result::Result<T, GenGridError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code and a process exit status so the
/// CLI can report failures without matching on individual error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Invocation
    MissingArgument,
    InvalidNumericArgument,

    // Output
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingArgument => "ERR_MISSING_ARGUMENT",
            ExErrorKind::InvalidNumericArgument => "ERR_INVALID_NUMERIC_ARGUMENT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Process exit status for this kind
    ///
    /// Invocation mistakes exit with `2`, matching clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExErrorKind::MissingArgument | ExErrorKind::InvalidNumericArgument => 2,
            ExErrorKind::Io | ExErrorKind::Internal => 1,
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    argument: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            argument: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the positional argument involved
    pub fn with_argument(mut self, name: impl Into<String>) -> Self {
        self.argument = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(argument) = &self.argument {
            write!(f, " (argument: {})", argument)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure reasons for a strict dimension parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionParseError {
    #[error("value is empty")]
    Empty,

    #[error("value is negative")]
    Negative,

    #[error("value is not a decimal integer")]
    NotANumber,

    #[error("value does not fit in 32 bits")]
    Overflow,
}

/// Error taxonomy for grid generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenGridError {
    /// A required positional argument was not supplied
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    /// A dimension argument was rejected under the strict policy
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidNumericArgument {
        name: String,
        value: String,
        reason: DimensionParseError,
    },

    /// Writing the document failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for GenGridError {
    fn from(err: std::io::Error) -> Self {
        GenGridError::Io {
            message: err.to_string(),
        }
    }
}

impl From<GenGridError> for ExError {
    fn from(err: GenGridError) -> Self {
        match err {
            GenGridError::MissingArgument { name } => {
                ExError::new(ExErrorKind::MissingArgument)
                    .with_op(OP_BUILD_GRID_SPEC)
                    .with_message(format!("missing required argument <{}>", name))
                    .with_argument(name)
            }

            GenGridError::InvalidNumericArgument {
                name,
                value,
                reason,
            } => ExError::new(ExErrorKind::InvalidNumericArgument)
                .with_op(OP_RESOLVE_DIMENSION)
                .with_message(format!("'{}' is not a valid dimension: {}", value, reason))
                .with_argument(name),

            GenGridError::Io { message } => ExError::new(ExErrorKind::Io)
                .with_op(OP_EMIT_GRID)
                .with_message(message),
        }
    }
}
