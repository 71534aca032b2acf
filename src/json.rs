//! [`KeyedDecoder`] and [`KeyedEncoder`] for `serde_json` objects.
//!
//! ```
//! use defaulted::{Defaulted, Empty, One, decode_field, encode_field};
//! use serde_json::{Map, json};
//!
//! let source = json!({ "name": "A" });
//! let source = source.as_object().unwrap();
//!
//! let count = decode_field::<One<i32>>(source, "count").unwrap();
//! let tags = decode_field::<Empty<Vec<String>>>(source, "tags").unwrap();
//! assert_eq!(count.value(), 1);
//! assert!(tags.value().is_empty());
//!
//! let mut out = Map::new();
//! out.insert("name".to_owned(), json!("A"));
//! encode_field(&mut out, "count", &count).unwrap();
//! encode_field(&mut out, "tags", &tags).unwrap();
//! assert_eq!(serde_json::Value::Object(out), json!({ "name": "A" }));
//! ```

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{DefaultValue, Defaulted, Error, KeyedDecoder, KeyedEncoder, Result};

impl KeyedDecoder for Map<String, Value> {
    type Error = Error;

    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    fn decode_value<V: DeserializeOwned>(&self, key: &str) -> Result<V> {
        let Some(value) = self.get(key) else {
            return Err(Error::MissingKey(key.to_owned()));
        };
        V::deserialize(value).map_err(|source| Error::TypeMismatch {
            key: key.to_owned(),
            source,
        })
    }
}

impl KeyedEncoder for Map<String, Value> {
    type Error = Error;

    fn encode_value<V: ?Sized + Serialize>(&mut self, key: &str, value: &V) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|source| Error::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Decodes the field stored under `key` in a JSON object.
#[inline]
pub fn decode_field<P>(object: &Map<String, Value>, key: &str) -> Result<Defaulted<P>>
where
    P: DefaultValue,
    P::Value: DeserializeOwned,
{
    Defaulted::decode_from(object, key)
}

/// Encodes `field` under `key` in a JSON object, leaving the object untouched
/// while the field is unset.
#[inline]
pub fn encode_field<P>(
    object: &mut Map<String, Value>,
    key: &str,
    field: &Defaulted<P>,
) -> Result<()>
where
    P: DefaultValue,
    P::Value: Serialize,
{
    field.encode_into(object, key)
}
