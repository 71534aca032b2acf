//! Serde deserialization for [`Defaulted`].
//!
//! A present key always decodes through `P::Value`'s own `Deserialize`, so
//! the field becomes explicit or the whole decode fails. A missing key is
//! only handled when the field carries `#[serde(default)]`, which builds the
//! unset state through [`Default`]:
//!
//! ```
//! use defaulted::{Defaulted, Empty, One};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Desk {
//!     name: String,
//!     #[serde(default)]
//!     monitors: Defaulted<One<u8>>,
//!     #[serde(default)]
//!     tags: Defaulted<Empty<Vec<String>>>,
//! }
//!
//! let desk: Desk = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
//! assert_eq!(desk.monitors.value(), 1);
//! assert!(desk.tags.value().is_empty());
//! ```
//!
//! # Null handling
//!
//! `null` is only accepted when `P::Value` accepts it, which for the built-in
//! policies means [`NullDefault`](crate::NullDefault). The result is the
//! explicit-null state, distinct from unset. For any other value type `null`
//! is a type error:
//!
//! ```
//! use defaulted::{Defaulted, One};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Desk {
//!     #[serde(default)]
//!     monitors: Defaulted<One<u8>>,
//! }
//!
//! assert!(serde_json::from_str::<Desk>(r#"{"monitors":null}"#).is_err());
//! ```
//!
//! Without `#[serde(default)]` serde reports a missing field for most value
//! types, and for `Option` values it would decode absence as an explicit
//! null, so the attribute is required for faithful round trips.

use serde::{Deserialize, Deserializer};

use crate::{DefaultValue, Defaulted};

impl<'de, P> Deserialize<'de> for Defaulted<P>
where
    P: DefaultValue,
    P::Value: Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        P::Value::deserialize(deserializer).map(Defaulted::new)
    }
}
