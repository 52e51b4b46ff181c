//! Error type definitions for key validation operations

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for pointguard operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation in which the key was rejected
        context: &'static str,
        /// Detailed reason for the rejection
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that received the wrong length
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that received the invalid parameter
        context: &'static str,
        /// Detailed reason the parameter is invalid
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for pointguard operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::InvalidKey { context, message } => {
                if message.is_empty() {
                    write!(f, "Invalid key in {}", context)
                } else {
                    write!(f, "Invalid key in {}: {}", context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidKey { context } => {
                write!(f, "Invalid key in {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
        }
    }
}
