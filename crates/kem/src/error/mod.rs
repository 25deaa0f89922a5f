//! Error handling for KEM operations

use core::fmt;
use pqcrypt_algorithms::error::Error as PrimitiveError;

/// Error type for KEM operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error in {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(e: PrimitiveError) -> Self {
        Error::Primitive(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;
