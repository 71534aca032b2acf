//! Explicit per-field decoding and encoding against a keyed object.
//!
//! Hand-written record codecs call [`Defaulted::decode_from`] and
//! [`Defaulted::encode_into`] once per field instead of relying on serde
//! field attributes. The object model only has to answer whether a key exists
//! and decode or encode a single value at a key.

use serde::{Serialize, de::DeserializeOwned};

use crate::{DefaultValue, Defaulted};

/// Read side of a keyed object.
///
/// `contains_key` must report an explicit `null` as present, so that absence
/// and null stay distinguishable.
pub trait KeyedDecoder {
    type Error;

    fn contains_key(&self, key: &str) -> bool;

    /// Decodes the value at `key`. Shape mismatches must be returned as
    /// errors, never replaced by a fallback value.
    fn decode_value<V: DeserializeOwned>(&self, key: &str) -> Result<V, Self::Error>;
}

/// Write side of a keyed object.
pub trait KeyedEncoder {
    type Error;

    fn encode_value<V: ?Sized + Serialize>(
        &mut self,
        key: &str,
        value: &V,
    ) -> Result<(), Self::Error>;
}

impl<P: DefaultValue> Defaulted<P> {
    /// Decodes the field stored under `key`.
    ///
    /// A missing key yields the unset state without touching the decoder's
    /// value path. A present key, including one holding `null`, is decoded
    /// as `P::Value` and any error is returned unchanged.
    pub fn decode_from<D>(source: &D, key: &str) -> Result<Self, D::Error>
    where
        D: ?Sized + KeyedDecoder,
        P::Value: DeserializeOwned,
    {
        if !source.contains_key(key) {
            tracing::trace!(key, "key absent, field left unset");
            return Ok(Self::unset());
        }
        let value = source.decode_value(key)?;
        tracing::trace!(key, "key present, field set explicitly");
        Ok(Self::new(value))
    }

    /// Encodes the field under `key`, writing nothing while it is unset.
    pub fn encode_into<E>(&self, sink: &mut E, key: &str) -> Result<(), E::Error>
    where
        E: ?Sized + KeyedEncoder,
        P::Value: Serialize,
    {
        match self.explicit() {
            Some(value) => sink.encode_value(key, value),
            None => {
                tracing::trace!(key, "field unset, key omitted");
                Ok(())
            }
        }
    }
}
