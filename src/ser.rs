//! Serde serialization for [`Defaulted`].
//!
//! Pair the field with `skip_serializing_if = "Defaulted::is_unset"` so that
//! an unset field leaves its key out of the output:
//!
//! ```
//! use defaulted::{Defaulted, NullDefault, Zero};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Score {
//!     name: &'static str,
//!     #[serde(skip_serializing_if = "Defaulted::is_unset")]
//!     points: Defaulted<Zero<u32>>,
//!     #[serde(skip_serializing_if = "Defaulted::is_unset")]
//!     rank: Defaulted<NullDefault<u32>>,
//! }
//!
//! let mut score = Score {
//!     name: "A",
//!     points: Defaulted::unset(),
//!     rank: Defaulted::unset(),
//! };
//! assert_eq!(serde_json::to_string(&score).unwrap(), r#"{"name":"A"}"#);
//!
//! score.points.set(0);
//! score.rank.set(None);
//! assert_eq!(
//!     serde_json::to_string(&score).unwrap(),
//!     r#"{"name":"A","points":0,"rank":null}"#
//! );
//! ```
//!
//! Where a key cannot be skipped, such as inside a sequence, an unset field
//! serializes its default value.

use serde::{Serialize, Serializer};

use crate::{DefaultValue, Defaulted};

impl<P> Serialize for Defaulted<P>
where
    P: DefaultValue,
    P::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.explicit() {
            Some(value) => value.serialize(serializer),
            None => P::default_value().serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Defaulted, One};

    #[test]
    fn unset_in_sequence_writes_default() {
        let values = vec![Defaulted::<One<i32>>::unset(), Defaulted::new(5)];
        assert_eq!(serde_json::to_string(&values).unwrap(), "[1,5]");
    }
}
