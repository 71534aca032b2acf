//! Error types for keyed field decoding and encoding.
//!
//! This module contains the [`Error`] type returned by the keyed API when a
//! [`KeyedDecoder`](crate::KeyedDecoder) or [`KeyedEncoder`](crate::KeyedEncoder)
//! is backed by this crate, such as the `serde_json` object impls.
//!
//! A missing key is never an error at the field level: it resolves to the
//! unset state. Errors only arise from a present value that does not match the
//! declared value type, or from a value that cannot be encoded.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "json")] {
//! use defaulted::{Error, One, decode_field};
//! use serde_json::json;
//!
//! let object = json!({ "monitors": "two" });
//! let object = object.as_object().unwrap();
//!
//! match decode_field::<One<u8>>(object, "monitors") {
//!     Err(Error::TypeMismatch { key, .. }) => assert_eq!(key, "monitors"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # }
//! ```

use std::fmt::{self, Display};

use serde::{de, ser};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when decoding or
/// encoding a keyed field.
#[derive(Debug)]
pub enum Error {
    Message(String),

    /// A value was requested for a key the object does not contain.
    ///
    /// [`Defaulted::decode_from`](crate::Defaulted::decode_from) checks for
    /// the key first, so this only surfaces from direct `decode_value` calls.
    #[cfg(feature = "json")]
    MissingKey(String),

    /// The value at `key` does not have the shape of the declared value type.
    ///
    /// This includes an explicit `null` for a value type that is not an
    /// `Option`.
    #[cfg(feature = "json")]
    TypeMismatch {
        key: String,
        source: serde_json::Error,
    },

    /// The value for `key` could not be encoded.
    #[cfg(feature = "json")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            #[cfg(feature = "json")]
            Error::MissingKey(key) => write!(formatter, "missing key `{key}`"),
            #[cfg(feature = "json")]
            Error::TypeMismatch { key, source } => {
                write!(formatter, "type mismatch at key `{key}`: {source}")
            }
            #[cfg(feature = "json")]
            Error::Encode { key, source } => {
                write!(formatter, "failed to encode key `{key}`: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Message(_) => None,
            #[cfg(feature = "json")]
            Error::MissingKey(_) => None,
            #[cfg(feature = "json")]
            Error::TypeMismatch { source, .. } | Error::Encode { source, .. } => Some(source),
        }
    }
}
