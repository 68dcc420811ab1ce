//! Autoref-based trait detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time trait detection on concrete types.
//!
//! ## How it works
//!
//! For each trait T we want to detect:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! Generic code goes through [`TypeCaps`](super::TypeCaps) instead.

use core::fmt::Debug;
use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a std trait.
macro_rules! impl_detect {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Trait> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_detect!(Default => IS_DEFAULT);
impl_detect!(Clone => IS_CLONE);
impl_detect!(Copy => IS_COPY);
impl_detect!(Debug => IS_DEBUG);
impl_detect!(PartialEq => IS_PARTIAL_EQ);
impl_detect!(PartialOrd => IS_PARTIAL_ORD);

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied.
///
/// **Note**: Only works for concrete types. For generic contexts, bound on
/// [`TypeCaps`](crate::detect::TypeCaps) and read its consts.
///
/// ```
/// use tola_util::has_impl;
///
/// assert!(has_impl!(String, Clone));
/// assert!(!has_impl!(String, Copy));
///
/// trait MyTrait {}
/// impl MyTrait for i32 {}
/// assert!(has_impl!(i32, MyTrait));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_std_traits() {
        assert!(Detect::<i32>::IS_DEFAULT);
        assert!(Detect::<i32>::IS_COPY);
        assert!(Detect::<f64>::IS_PARTIAL_ORD);

        struct Opaque;
        assert!(!Detect::<Opaque>::IS_PARTIAL_ORD);
        assert!(!Detect::<Opaque>::IS_CLONE);
    }

    #[test]
    fn test_has_impl_custom_trait() {
        #[allow(dead_code)]
        trait MyTrait {}
        impl MyTrait for i32 {}

        assert!(has_impl!(i32, MyTrait));
        assert!(!has_impl!(u8, MyTrait));
    }
}
