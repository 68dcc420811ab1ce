//! Constructibility and convertibility between two types.
//!
//! Two relations, one strictly stronger than the other:
//!
//! | Relation | Rust bound | Meaning |
//! |----------|------------|---------|
//! | convertible `S -> T` | `T: From<S>` | usable wherever a `T` is expected |
//! | constructible `S -> T` | `T: Construct<S>` | buildable when asked for by name |
//!
//! Every convertible pair is constructible. A type that should only be
//! built on explicit request implements [`Construct`] without `From`.

/// Explicit construction of `Self` from a source value.
///
/// ```
/// use tola_util::detect::Construct;
///
/// struct Meters(u32);
/// impl Construct<u32> for Meters {
///     fn construct(source: u32) -> Self { Meters(source) }
/// }
///
/// let m = Meters::construct(5u32);
/// assert_eq!(m.0, 5);
/// // Conversion still works through the blanket impl:
/// assert_eq!(u64::construct(7u32), 7);
/// ```
pub trait Construct<S>: Sized {
    fn construct(source: S) -> Self;
}

impl<T, S> Construct<S> for T
where
    T: From<S>,
{
    #[inline(always)]
    fn construct(source: S) -> Self {
        T::from(source)
    }
}

/// Check whether a concrete `S` converts implicitly into `T` (`T: From<S>`).
///
/// ```
/// use tola_util::is_convertible;
///
/// assert!(is_convertible!(u8 => u32));
/// assert!(!is_convertible!(u32 => u8));
/// ```
#[macro_export]
macro_rules! is_convertible {
    ($S:ty => $T:ty) => {{
        struct __Probe<S, T>(::core::marker::PhantomData<(S, T)>);

        trait __Fallback { const VAL: bool = false; }
        impl<S, T> __Fallback for __Probe<S, T> {}

        impl<S, T: ::core::convert::From<S>> __Probe<S, T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$S, $T>::VAL
    }};
}

/// Check whether a concrete `T` can be constructed from `S`
/// (`T: Construct<S>`), implicitly or explicitly.
///
/// ```
/// use tola_util::{is_constructible, is_convertible, detect::Construct};
///
/// struct Meters(u32);
/// impl Construct<u32> for Meters {
///     fn construct(source: u32) -> Self { Meters(source) }
/// }
///
/// assert!(is_constructible!(u32 => Meters));
/// assert!(!is_convertible!(u32 => Meters));
/// ```
#[macro_export]
macro_rules! is_constructible {
    ($S:ty => $T:ty) => {{
        struct __Probe<S, T>(::core::marker::PhantomData<(S, T)>);

        trait __Fallback { const VAL: bool = false; }
        impl<S, T> __Fallback for __Probe<S, T> {}

        impl<S, T: $crate::detect::Construct<S>> __Probe<S, T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$S, $T>::VAL
    }};
}
