use std::{collections::HashMap, marker::PhantomData};

use crate::{Collection, DefaultValue, Numeric, SignedNumeric, Variants};

macro_rules! define_constant_policy {
    ($($(#[$meta:meta])* $name:ident: $value:ty = $default:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            pub enum $name {}

            impl DefaultValue for $name {
                type Value = $value;

                #[inline]
                fn default_value() -> $value {
                    $default
                }
            }
        )*
    };
}

macro_rules! define_generic_policy {
    ($($(#[$meta:meta])* $name:ident<$($param:ident),+>),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<$($param),+>(PhantomData<fn() -> ($($param,)+)>);
        )*
    };
}

define_constant_policy!(
    /// Defaults a `bool` to `false`.
    False: bool = false,
    /// Defaults a `bool` to `true`.
    True: bool = true,
);

define_generic_policy!(
    /// Defaults a collection to empty.
    Empty<A>,
    /// Defaults a `HashMap<K, V>` to empty.
    EmptyMap<K, V>,
    /// Defaults an enum to its first variant in declared order.
    FirstVariant<A>,
    /// Defaults a number to `0`.
    Zero<T>,
    /// Defaults a number to `1`.
    One<T>,
    /// Defaults a signed number to `-1`.
    MinusOne<T>,
    /// Defaults an `Option<A>` to `None`.
    NullDefault<A>,
    /// Defaults to `T::default()`.
    StdDefault<T>,
);

impl<A: Collection> DefaultValue for Empty<A> {
    type Value = A;

    #[inline]
    fn default_value() -> A {
        A::empty()
    }
}

impl<K, V> DefaultValue for EmptyMap<K, V> {
    type Value = HashMap<K, V>;

    #[inline]
    fn default_value() -> HashMap<K, V> {
        HashMap::new()
    }
}

impl<A: Variants + Clone> DefaultValue for FirstVariant<A> {
    type Value = A;

    #[inline]
    fn default_value() -> A {
        const { assert!(!A::VARIANTS.is_empty(), "FirstVariant needs at least one variant") };
        A::VARIANTS[0].clone()
    }
}

impl<T: Numeric> DefaultValue for Zero<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::ZERO
    }
}

impl<T: Numeric> DefaultValue for One<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::ONE
    }
}

impl<T: SignedNumeric> DefaultValue for MinusOne<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::MINUS_ONE
    }
}

impl<A> DefaultValue for NullDefault<A> {
    type Value = Option<A>;

    #[inline]
    fn default_value() -> Option<A> {
        None
    }
}

impl<T: Default> DefaultValue for StdDefault<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_policies() {
        assert_eq!(Zero::<u8>::default_value(), 0);
        assert_eq!(One::<i64>::default_value(), 1);
        assert_eq!(MinusOne::<i16>::default_value(), -1);
        assert_eq!(Zero::<f64>::default_value(), 0.0);
        assert_eq!(MinusOne::<f32>::default_value(), -1.0);
    }

    #[test]
    fn policies_are_zero_sized() {
        assert_eq!(size_of::<Zero<u64>>(), 0);
        assert_eq!(size_of::<EmptyMap<String, Vec<u8>>>(), 0);
        assert_eq!(size_of::<True>(), 0);
    }
}
