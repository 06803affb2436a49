use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for shelfdb operations
///
/// Absence of data is never an error in shelfdb: lookups return `None`, queries return
/// empty vectors and counts return zero. The kinds below cover invalid input, corrupt
/// persisted state and failures reported by the key-value substrate.
///
/// # Examples
///
/// ```rust
/// use shelfdb::errors::{ErrorKind, ShelfError, ShelfResult};
///
/// fn example() -> ShelfResult<()> {
///     Err(ShelfError::new("collection name cannot be empty", ErrorKind::ValidationError))
/// }
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // Validation Errors - names, field lists, builder settings
    /// Generic validation error
    ValidationError,

    // Data Encoding Errors - persisted collections that cannot be decoded
    /// Error encoding or decoding data
    EncodingError,
    /// Error mapping a value to or from a serde data model
    ObjectMappingError,

    // Backend and Store Errors - raised by key-value substrates
    /// Error from storage backend
    BackendError,
    /// Store has already been closed
    StoreAlreadyClosed,
    /// Generic IO error
    IOError,

    // Generic/Internal Errors - used as fallback
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::ObjectMappingError => write!(f, "Object mapping error"),
            ErrorKind::BackendError => write!(f, "Backend error"),
            ErrorKind::StoreAlreadyClosed => write!(f, "Store already closed"),
            ErrorKind::IOError => write!(f, "IO error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom shelfdb error type.
///
/// `ShelfError` carries a message, a kind and an optional cause. A backtrace is
/// captured when the error is constructed and printed by the `Debug` impl when there
/// is no cause to print instead.
///
/// # Examples
///
/// ```rust
/// use shelfdb::errors::{ErrorKind, ShelfError};
///
/// let cause = ShelfError::new("disk unplugged", ErrorKind::IOError);
/// let err = ShelfError::new_with_cause("failed to persist collection", ErrorKind::BackendError, cause);
/// assert_eq!(err.kind(), &ErrorKind::BackendError);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct ShelfError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<ShelfError>>,
    backtrace: Arc<Backtrace>,
}

impl ShelfError {
    /// Creates a new `ShelfError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        ShelfError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `ShelfError` that wraps the error which caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: ShelfError) -> Self {
        ShelfError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&ShelfError> {
        self.cause.as_deref()
    }
}

impl Display for ShelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for ShelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for ShelfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for shelfdb operations.
pub type ShelfResult<T> = Result<T, ShelfError>;

#[cfg(feature = "serde")]
impl serde::de::Error for ShelfError {
    fn custom<T: Display>(msg: T) -> Self {
        ShelfError::new(&msg.to_string(), ErrorKind::ObjectMappingError)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for ShelfError {
    fn custom<T: Display>(msg: T) -> Self {
        ShelfError::new(&msg.to_string(), ErrorKind::ObjectMappingError)
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                ErrorKind::BackendError
            }
            _ => ErrorKind::IOError,
        };
        ShelfError::new(&format!("IO error: {}", err), error_kind)
    }
}

impl From<String> for ShelfError {
    fn from(msg: String) -> Self {
        ShelfError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for ShelfError {
    fn from(msg: &str) -> Self {
        ShelfError::new(msg, ErrorKind::InternalError)
    }
}
