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
/// Parsing an identifier is mostly total: unknown or unparseable optional parts (assembly
/// versions, namespaces) degrade to their `Unknown` value instead of failing. The variants
/// below cover the cases where no sensible fallback exists.
///
/// # Error Categories
///
/// ## Grammar Errors
/// - [`Error::Malformed`] - Unbalanced brackets or an out-of-range index while scanning
/// - [`Error::InvalidIdentifier`] - A strict constructor received a string no grammar rule accepts
///
/// ## Model Errors
/// - [`Error::InvalidConversion`] - A variant-specific view was requested on the wrong variant
/// - [`Error::InvalidRank`] - Array construction with a rank smaller than one
///
/// ## Serialization Errors
/// - [`Error::UnknownPrefix`] - A serialized token carried a prefix that maps to no name kind
///
/// # Examples
///
/// ```rust
/// use namescope::{Error, names::MethodName};
///
/// match MethodName::new("[p:int] [T, P]..ctor()") {
///     Ok(method) => println!("parsed {}", method),
///     Err(Error::InvalidIdentifier { kind, identifier }) => {
///         eprintln!("not a valid {}: {}", kind, identifier);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identifier is damaged and could not be scanned.
    ///
    /// Raised by the tokenizer when brackets do not balance, or when an index does not point
    /// at the expected bracket. The error includes the source location where the malformation
    /// was detected for debugging purposes.
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

    /// A strict constructor was handed an identifier of the wrong shape.
    ///
    /// `kind` names the expected entity (for example `"method"` or `"array type"`).
    #[error("Invalid {kind} identifier: '{identifier}'")]
    InvalidIdentifier {
        /// The kind of name that was expected
        kind: &'static str,
        /// The rejected identifier
        identifier: String,
    },

    /// A variant-specific view was requested on an incompatible type name.
    #[error("Cannot convert {from} to {to}")]
    InvalidConversion {
        /// The variant of the instance
        from: &'static str,
        /// The requested view
        to: &'static str,
    },

    /// Array types need a rank of at least one.
    #[error("Invalid array rank {0}, must be at least 1")]
    InvalidRank(i32),

    /// The serialized token carries a prefix that maps to no name kind.
    #[error("Unknown name prefix '{0}'")]
    UnknownPrefix(String),
}
