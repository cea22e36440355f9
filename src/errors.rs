use thiserror::Error;

/// Errors that can occur while building or drawing on a canvas
#[derive(Error, Debug)]
pub enum DrawError {
    /// Malformed input: non-numeric coordinate, wrong argument count, unknown command
    #[error("Invalid parameter: {field} - {message}")]
    Validation { field: String, message: String },

    /// A drawing command was issued before any canvas exists
    #[error("No canvas. Create one first with: C w h")]
    NoCanvas,

    /// Diagonal lines and shapes or seeds outside the canvas
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Colour argument that is not exactly one character
    #[error("Colour error: {0}")]
    Color(String),

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used when reporting errors back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Geometry,
    Color,
    Configuration,
    Io,
}

impl DrawError {
    /// Create a validation error for a named field
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a geometry error
    pub fn geometry(message: impl Into<String>) -> Self {
        Self::Geometry(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } | Self::NoCanvas => ErrorKind::Validation,
            Self::Geometry(_) => ErrorKind::Geometry,
            Self::Color(_) => ErrorKind::Color,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Errors the session reports and then carries on from
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Io)
    }
}

/// Type alias for Result with `DrawError`
pub type Result<T> = std::result::Result<T, DrawError>;

/// Parse a user-supplied integer, naming the field on failure
pub fn coerce_int(field: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DrawError::invalid(field, format!("expected an integer, got '{raw}'")))
}

/// Parse a user-supplied non-negative integer, naming the field on failure
pub fn coerce_dimension(field: &str, raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        DrawError::invalid(field, format!("expected a non-negative integer, got '{raw}'"))
    })
}
