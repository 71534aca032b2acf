use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

pub mod policy;

/// A type-level policy supplying the value a [`Defaulted`](crate::Defaulted)
/// field reads as while it is unset.
///
/// Implementors are marker types that are never instantiated. The returned
/// value must be the same on every call and must survive a serde round trip
/// of `Self::Value`.
///
/// # Example
///
/// ```
/// use defaulted::{DefaultValue, Defaulted};
///
/// enum EightyEighty {}
///
/// impl DefaultValue for EightyEighty {
///     type Value = u16;
///
///     fn default_value() -> u16 {
///         8080
///     }
/// }
///
/// let port = Defaulted::<EightyEighty>::unset();
/// assert_eq!(port.value(), 8080);
/// ```
pub trait DefaultValue {
    type Value;

    fn default_value() -> Self::Value;
}

/// Numeric types with a zero and a one.
///
/// Implemented for every primitive integer and float type.
pub trait Numeric: Sized {
    const ZERO: Self;
    const ONE: Self;
}

/// Numeric types with a negative one.
///
/// Unsigned integers do not implement this, so
/// [`MinusOne<u32>`](policy::MinusOne) is rejected at compile time.
pub trait SignedNumeric: Numeric {
    const MINUS_ONE: Self;
}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal; $($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

macro_rules! impl_signed_numeric {
    ($minus_one:literal; $($ty:ty),* $(,)?) => {
        $(
            impl SignedNumeric for $ty {
                const MINUS_ONE: Self = $minus_one;
            }
        )*
    };
}

impl_numeric!(0, 1; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0; f32, f64);
impl_signed_numeric!(-1; i8, i16, i32, i64, i128, isize);
impl_signed_numeric!(-1.0; f32, f64);

/// A finite set of enum variants in declared order.
///
/// Usually implemented with the [`variants!`](crate::variants) macro. An
/// empty `VARIANTS` list makes [`FirstVariant`](policy::FirstVariant) fail to
/// compile.
pub trait Variants: Sized + 'static {
    const VARIANTS: &'static [Self];
}

/// Implements [`Variants`] for a fieldless enum, listing the variants in the
/// order given.
///
/// ```
/// use defaulted::{Variants, variants};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Stage {
///     Draft,
///     Review,
///     Published,
/// }
///
/// variants!(Stage { Draft, Review, Published });
///
/// assert_eq!(Stage::VARIANTS[0], Stage::Draft);
/// ```
#[macro_export]
macro_rules! variants {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Variants for $ty {
            const VARIANTS: &'static [Self] = &[$($ty::$variant),+];
        }
    };
}

/// Collections that can be constructed empty.
///
/// Bounds [`Empty`](policy::Empty) so that it only applies to collection-like
/// values.
pub trait Collection {
    fn empty() -> Self;

    fn is_empty(&self) -> bool;
}

macro_rules! impl_collection {
    ($(<$($param:ident $(: $bound:path)?),*> $ty:ty),* $(,)?) => {
        $(
            impl<$($param $(: $bound)?),*> Collection for $ty {
                #[inline]
                fn empty() -> Self {
                    <$ty>::new()
                }

                #[inline]
                fn is_empty(&self) -> bool {
                    <$ty>::is_empty(self)
                }
            }
        )*
    };
}

impl_collection!(
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> LinkedList<T>,
    <T: Ord> BinaryHeap<T>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
);

impl Collection for String {
    #[inline]
    fn empty() -> Self {
        String::new()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T, S: BuildHasher + Default> Collection for HashSet<T, S> {
    #[inline]
    fn empty() -> Self {
        HashSet::with_hasher(S::default())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V, S: BuildHasher + Default> Collection for HashMap<K, V, S> {
    #[inline]
    fn empty() -> Self {
        HashMap::with_hasher(S::default())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}
