use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while reading implementor
/// artifacts, scanning documentation trees, and publishing tables to a registrar. Each variant
/// provides specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Artifact Parsing Errors
/// - [`Error::Malformed`] - Artifact text that violates the implementors grammar
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of the input
/// - [`Error::NotSupported`] - Input that is not an implementors artifact
/// - [`Error::Empty`] - Empty input provided
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Utf8`] - Artifact bytes that are not valid UTF-8
///
/// ## Registry Errors
/// - [`Error::LockError`] - Registry slot lock was poisoned
///
/// # Examples
///
/// ```rust
/// use traitdex::{Artifact, Error};
/// use std::path::Path;
///
/// match Artifact::from_file(Path::new("doc/implementors/core/ops/trait.Drop.js")) {
///     Ok(artifact) => {
///         println!("Parsed {} crates", artifact.table().len());
///     }
///     Err(Error::NotSupported) => {
///         eprintln!("Not an implementors artifact");
///     }
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed artifact: {} ({}:{})", message, file, line);
///     }
///     Err(Error::FileError(io_err)) => {
///         eprintln!("I/O error: {}", io_err);
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The artifact is damaged and could not be parsed.
    ///
    /// This error indicates that the input text does not conform to the constrained
    /// JavaScript subset that rustdoc emits for implementors artifacts. The error
    /// includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while scanning the input.
    ///
    /// This error occurs when the scanner runs off the end of the artifact text,
    /// for example because a string literal or the surrounding function expression
    /// is truncated.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// This input is not an implementors artifact.
    ///
    /// Indicates that the input does not open with the immediately-invoked function
    /// expression rustdoc wraps implementors data in, or that a directory handed to
    /// the doc-root scanner contains no `implementors/` tree.
    #[error("This input is not an implementors artifact")]
    NotSupported,

    /// Provided input was empty.
    ///
    /// This error occurs when an empty or whitespace-only file or buffer is
    /// provided where implementors data was expected.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Artifact bytes are not valid UTF-8.
    ///
    /// Implementors artifacts are text; a file that fails UTF-8 validation
    /// cannot be an artifact emitted by the documentation generator.
    #[error("{0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Failed to lock target.
    ///
    /// This error occurs when a registry slot's lock is poisoned because another
    /// thread panicked while publishing or installing a registrar.
    #[error("Failed to lock target")]
    LockError,

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for
    /// wrapping external library errors with additional context.
    #[error("{0}")]
    Error(String),
}
