//! The [`Defaulted`] field container.
//!
//! A `Defaulted<P>` stores `Option<P::Value>`:
//!
//! | State | Storage | Reads as | Encodes as |
//! |-------|---------|----------|------------|
//! | unset | `None` | `P::default_value()` | key omitted |
//! | explicit | `Some(v)` | `v` | `v` |
//!
//! When `P::Value` is itself an `Option<T>`, `Some(None)` is an explicit null:
//! it reads as `None` like the unset state but encodes as `null`.
//!
//! # Example
//!
//! ```
//! use defaulted::{Defaulted, One};
//!
//! let mut monitors = Defaulted::<One<u8>>::unset();
//! assert_eq!(monitors.value(), 1);
//!
//! monitors.set(2);
//! assert_eq!(monitors.value(), 2);
//!
//! monitors.reset();
//! assert_eq!(monitors.value(), 1);
//! assert!(monitors.is_unset());
//! ```

use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::DefaultValue;

/// A value that reads as `P::default_value()` until it is explicitly set.
///
/// Equality, ordering and hashing compare the explicit state, so an unset
/// field is not equal to one explicitly set to the default value.
pub struct Defaulted<P: DefaultValue> {
    explicit: Option<P::Value>,
    marker: PhantomData<fn() -> P>,
}

impl<P: DefaultValue> Defaulted<P> {
    /// Creates an unset field.
    #[inline]
    pub const fn unset() -> Self {
        Self {
            explicit: None,
            marker: PhantomData,
        }
    }

    /// Creates a field explicitly set to `value`.
    #[inline]
    pub const fn new(value: P::Value) -> Self {
        Self {
            explicit: Some(value),
            marker: PhantomData,
        }
    }

    /// Seeds a field from an optional value: `None` leaves it unset.
    #[inline]
    pub const fn from_optional(value: Option<P::Value>) -> Self {
        Self {
            explicit: value,
            marker: PhantomData,
        }
    }

    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.explicit.is_none()
    }

    #[inline]
    pub const fn is_explicit(&self) -> bool {
        self.explicit.is_some()
    }

    /// Returns the read value, borrowing the explicit value when there is one.
    #[inline]
    pub fn get(&self) -> Cow<'_, P::Value>
    where
        P::Value: Clone,
    {
        match &self.explicit {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(P::default_value()),
        }
    }

    /// Returns the read value by value.
    #[inline]
    pub fn value(&self) -> P::Value
    where
        P::Value: Clone,
    {
        match &self.explicit {
            Some(value) => value.clone(),
            None => P::default_value(),
        }
    }

    #[inline]
    pub fn into_value(self) -> P::Value {
        self.explicit.unwrap_or_else(P::default_value)
    }

    /// Explicitly sets the value. The field stays explicit even if `value`
    /// equals the default.
    #[inline]
    pub fn set(&mut self, value: P::Value) {
        self.explicit = Some(value);
    }

    /// Explicitly sets the value and returns the previous explicit value.
    #[inline]
    pub fn replace(&mut self, value: P::Value) -> Option<P::Value> {
        self.explicit.replace(value)
    }

    /// Borrows the value mutably.
    ///
    /// An unset field is first set to the default, so this counts as a write.
    #[inline]
    pub fn get_mut(&mut self) -> &mut P::Value {
        self.explicit.get_or_insert_with(P::default_value)
    }

    /// Returns the field to the unset state.
    #[inline]
    pub fn reset(&mut self) {
        self.explicit = None;
    }

    /// Returns the field to the unset state and hands back the previous
    /// explicit value.
    #[inline]
    pub fn take(&mut self) -> Option<P::Value> {
        self.explicit.take()
    }

    /// The explicit state: `None` while unset.
    #[inline]
    pub const fn explicit(&self) -> Option<&P::Value> {
        self.explicit.as_ref()
    }

    /// Replaces the explicit state. `None` resets the field.
    #[inline]
    pub fn set_explicit(&mut self, value: Option<P::Value>) {
        self.explicit = value;
    }

    #[inline]
    pub fn into_explicit(self) -> Option<P::Value> {
        self.explicit
    }

    /// Whether the read value equals the provider default.
    ///
    /// This is informational. Encoding looks only at [`is_unset`](Self::is_unset).
    #[inline]
    pub fn is_default_value(&self) -> bool
    where
        P::Value: PartialEq,
    {
        match &self.explicit {
            Some(value) => *value == P::default_value(),
            None => true,
        }
    }
}

impl<P: DefaultValue> Default for Defaulted<P> {
    #[inline]
    fn default() -> Self {
        Self::unset()
    }
}

impl<P: DefaultValue> From<Option<P::Value>> for Defaulted<P> {
    #[inline]
    fn from(value: Option<P::Value>) -> Self {
        Self::from_optional(value)
    }
}

impl<P: DefaultValue> Clone for Defaulted<P>
where
    P::Value: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::from_optional(self.explicit.clone())
    }
}

impl<P: DefaultValue> Copy for Defaulted<P> where P::Value: Copy {}

impl<P: DefaultValue> fmt::Debug for Defaulted<P>
where
    P::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.explicit {
            Some(value) => f.debug_tuple("Explicit").field(value).finish(),
            None => f.write_str("Unset"),
        }
    }
}

impl<P: DefaultValue> PartialEq for Defaulted<P>
where
    P::Value: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.explicit == other.explicit
    }
}

impl<P: DefaultValue> Eq for Defaulted<P> where P::Value: Eq {}

impl<P: DefaultValue> PartialOrd for Defaulted<P>
where
    P::Value: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.explicit.partial_cmp(&other.explicit)
    }
}

impl<P: DefaultValue> Ord for Defaulted<P>
where
    P::Value: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.explicit.cmp(&other.explicit)
    }
}

impl<P: DefaultValue> Hash for Defaulted<P>
where
    P::Value: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.explicit.hash(state);
    }
}
