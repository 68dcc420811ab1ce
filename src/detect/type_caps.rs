//! Capability table usable from generic code.

use core::cell::Cell;
use core::marker::PhantomData;

use crate::primitives::{Bool, False};

/// Compile-time capability answers for a type.
///
/// Concrete types get this through [`impl_type_caps!`](crate::impl_type_caps)
/// or `#[derive(TypeCaps)]`, which fill every const from the
/// [`Detect`](super::Detect) probes. Generic containers compose the answers
/// of their parameters (see the impl for [`Pair`](crate::Pair)).
pub trait TypeCaps {
    /// `Self: Default`
    const IS_DEFAULT: bool;
    /// `Self: Clone`
    const IS_CLONE: bool;
    /// `Self: Copy`
    const IS_COPY: bool;
    /// `Self: Debug`
    const IS_DEBUG: bool;
    /// `Self: PartialEq`
    const IS_PARTIAL_EQ: bool;
    /// `Self: PartialOrd`
    const IS_PARTIAL_ORD: bool;

    /// `True` only for instantiations of [`Pair`](crate::Pair).
    type IsPair: Bool;

    const IS_PAIR: bool = <Self::IsPair as Bool>::VALUE;
}

/// Can `T` be default-constructed?
#[inline(always)]
pub const fn is_default_constructible<T: ?Sized + TypeCaps>() -> bool {
    T::IS_DEFAULT
}

/// Can `T` be copy-constructed (cloned)?
#[inline(always)]
pub const fn is_copy_constructible<T: ?Sized + TypeCaps>() -> bool {
    T::IS_CLONE
}

/// Is `T` an instantiation of [`Pair`](crate::Pair)?
///
/// ```
/// use tola_util::{is_pair, Pair};
///
/// assert!(is_pair::<Pair<i32, i32>>());
/// assert!(!is_pair::<i32>());
/// assert!(!is_pair::<(i32, i32)>());
/// ```
#[inline(always)]
pub const fn is_pair<T: ?Sized + TypeCaps>() -> bool {
    T::IS_PAIR
}

/// Implement [`TypeCaps`] for concrete (non-generic) types.
///
/// ```
/// use tola_util::{impl_type_caps, detect::TypeCaps};
///
/// #[derive(Clone, Debug)]
/// struct Token(u32);
/// impl_type_caps!(Token);
///
/// assert!(<Token as TypeCaps>::IS_CLONE);
/// assert!(!<Token as TypeCaps>::IS_DEFAULT);
/// ```
#[macro_export]
macro_rules! impl_type_caps {
    ($($T:ty),+ $(,)?) => {
        $(
            impl $crate::detect::TypeCaps for $T {
                $crate::__type_caps_body!($T);
            }
        )+
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __type_caps_body {
    ($T:ty) => {
        #[allow(unused_imports)]
        const IS_DEFAULT: bool = {
            use $crate::detect::DefaultFallback;
            $crate::detect::Detect::<$T>::IS_DEFAULT
        };
        #[allow(unused_imports)]
        const IS_CLONE: bool = {
            use $crate::detect::CloneFallback;
            $crate::detect::Detect::<$T>::IS_CLONE
        };
        #[allow(unused_imports)]
        const IS_COPY: bool = {
            use $crate::detect::CopyFallback;
            $crate::detect::Detect::<$T>::IS_COPY
        };
        #[allow(unused_imports)]
        const IS_DEBUG: bool = {
            use $crate::detect::DebugFallback;
            $crate::detect::Detect::<$T>::IS_DEBUG
        };
        #[allow(unused_imports)]
        const IS_PARTIAL_EQ: bool = {
            use $crate::detect::PartialEqFallback;
            $crate::detect::Detect::<$T>::IS_PARTIAL_EQ
        };
        #[allow(unused_imports)]
        const IS_PARTIAL_ORD: bool = {
            use $crate::detect::PartialOrdFallback;
            $crate::detect::Detect::<$T>::IS_PARTIAL_ORD
        };
        type IsPair = $crate::False;
    };
}

impl_type_caps!(
    bool, char, (),
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    &'static str,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::time::Duration,
);

#[cfg(feature = "alloc")]
impl_type_caps!(alloc::string::String);

// =============================================================================
// Generic std types: answers composed from the parameters
// =============================================================================

macro_rules! impl_tuple_caps {
    ($($T:ident),+) => {
        impl<$($T: TypeCaps),+> TypeCaps for ($($T,)+) {
            const IS_DEFAULT: bool = true $(&& $T::IS_DEFAULT)+;
            const IS_CLONE: bool = true $(&& $T::IS_CLONE)+;
            const IS_COPY: bool = true $(&& $T::IS_COPY)+;
            const IS_DEBUG: bool = true $(&& $T::IS_DEBUG)+;
            const IS_PARTIAL_EQ: bool = true $(&& $T::IS_PARTIAL_EQ)+;
            const IS_PARTIAL_ORD: bool = true $(&& $T::IS_PARTIAL_ORD)+;
            type IsPair = False;
        }
    };
}

impl_tuple_caps!(A);
impl_tuple_caps!(A, B);
impl_tuple_caps!(A, B, C);
impl_tuple_caps!(A, B, C, D);
impl_tuple_caps!(A, B, C, D, E);
impl_tuple_caps!(A, B, C, D, E, F);
impl_tuple_caps!(A, B, C, D, E, F, G);
impl_tuple_caps!(A, B, C, D, E, F, G, H);
impl_tuple_caps!(A, B, C, D, E, F, G, H, I);
impl_tuple_caps!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_caps!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_caps!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<T: TypeCaps, const N: usize> TypeCaps for [T; N] {
    // `Default` for arrays stops at length 32.
    const IS_DEFAULT: bool = N == 0 || (N <= 32 && T::IS_DEFAULT);
    const IS_CLONE: bool = T::IS_CLONE;
    const IS_COPY: bool = T::IS_COPY;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<'a, T: TypeCaps> TypeCaps for &'a T {
    const IS_DEFAULT: bool = false;
    const IS_CLONE: bool = true;
    const IS_COPY: bool = true;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<'a, T: TypeCaps> TypeCaps for &'a [T] {
    const IS_DEFAULT: bool = true;
    const IS_CLONE: bool = true;
    const IS_COPY: bool = true;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<'a, T: TypeCaps> TypeCaps for &'a mut T {
    const IS_DEFAULT: bool = false;
    const IS_CLONE: bool = false;
    const IS_COPY: bool = false;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<T: TypeCaps> TypeCaps for Option<T> {
    const IS_DEFAULT: bool = true;
    const IS_CLONE: bool = T::IS_CLONE;
    const IS_COPY: bool = T::IS_COPY;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<T: TypeCaps, E: TypeCaps> TypeCaps for Result<T, E> {
    const IS_DEFAULT: bool = false;
    const IS_CLONE: bool = T::IS_CLONE && E::IS_CLONE;
    const IS_COPY: bool = T::IS_COPY && E::IS_COPY;
    const IS_DEBUG: bool = T::IS_DEBUG && E::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ && E::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD && E::IS_PARTIAL_ORD;
    type IsPair = False;
}

/// `Cell<T>` is only `Clone`, `Debug` and comparable when `T: Copy`.
impl<T: TypeCaps> TypeCaps for Cell<T> {
    const IS_DEFAULT: bool = T::IS_DEFAULT;
    const IS_CLONE: bool = T::IS_COPY;
    const IS_COPY: bool = false;
    const IS_DEBUG: bool = T::IS_COPY && T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_COPY && T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_COPY && T::IS_PARTIAL_ORD;
    type IsPair = False;
}

impl<T: ?Sized> TypeCaps for PhantomData<T> {
    const IS_DEFAULT: bool = true;
    const IS_CLONE: bool = true;
    const IS_COPY: bool = true;
    const IS_DEBUG: bool = true;
    const IS_PARTIAL_EQ: bool = true;
    const IS_PARTIAL_ORD: bool = true;
    type IsPair = False;
}

#[cfg(feature = "alloc")]
impl<T: TypeCaps> TypeCaps for alloc::vec::Vec<T> {
    const IS_DEFAULT: bool = true;
    const IS_CLONE: bool = T::IS_CLONE;
    const IS_COPY: bool = false;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}

#[cfg(feature = "alloc")]
impl<T: TypeCaps> TypeCaps for alloc::boxed::Box<T> {
    const IS_DEFAULT: bool = T::IS_DEFAULT;
    const IS_CLONE: bool = T::IS_CLONE;
    const IS_COPY: bool = false;
    const IS_DEBUG: bool = T::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = T::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = T::IS_PARTIAL_ORD;
    type IsPair = False;
}
