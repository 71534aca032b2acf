//! Record fields with a statically-known default.
//!
//! A [`Defaulted<P>`] field reads as the default chosen by the policy `P`
//! until it is explicitly set. Through serde it decodes an absent key as
//! unset, keeps an explicit value (or an explicit `null` for `Option` values)
//! as given, and encodes nothing while unset, so a decode then encode round
//! trip reproduces the input.
//!
//! ```
//! use defaulted::{Defaulted, Empty, One};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
//!     count: Defaulted<One<i32>>,
//!     #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
//!     tags: Defaulted<Empty<Vec<String>>>,
//! }
//!
//! let record: Record = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
//! assert_eq!(record.count.value(), 1);
//! assert!(record.tags.value().is_empty());
//! assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"A"}"#);
//! ```

mod de;
mod error;
mod field;
#[cfg(feature = "json")]
mod json;
mod keyed;
pub mod provider;
mod ser;

pub use error::*;
pub use field::*;
#[cfg(feature = "json")]
pub use json::*;
pub use keyed::*;
pub use provider::policy::*;
pub use provider::*;
