//! # Layer 3: Generic Pair
//!
//! `Pair<A, B>` holds two independently typed fields. Which way a pair may be
//! built from a given source depends on what the field types support:
//!
//! | Source | Implicit (`From`, [`IntoPair`]) | Explicit only ([`ConstructPair`]) |
//! |--------|----------------------------------|-----------------------------------|
//! | nothing | `Default` | - |
//! | `(&A, &B)` | [`Pair::forward`] (`A: Clone, B: Clone`) | [`Pair::cloned`] |
//! | `(X, Y)` | `A: From<X>, B: From<Y>` | [`Pair::construct`] |
//! | `&Pair<X, Y>` | [`Pair::from_pair_ref`] | [`Pair::construct_from_pair_ref`] |
//! | `Pair<X, Y>` | [`Pair::from_pair`] | [`Pair::construct_from_pair`] |
//! | `Pair<A, B>` | `Clone` / move | - |
//!
//! An implicit context accepts a source only when **every** field converts.
//! When at least one field is merely constructible, only the explicit forms
//! compile:
//!
//! ```compile_fail
//! use tola_util::{Pair, detect::Construct};
//!
//! struct Meters(u32);
//! impl Construct<u32> for Meters {
//!     fn construct(source: u32) -> Self { Meters(source) }
//! }
//!
//! let p: Pair<Meters, Meters> = (1u32, 2u32).into();
//! ```

mod cmp;
mod convert;

pub use convert::{ConstructPair, IntoPair};

use crate::detect::{Construct, TypeCaps};
use crate::primitives::True;
use crate::transfer::{self, Binding};

/// Two values of independent types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Build a pair from two values of exactly the field types.
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Copy both fields from borrowed values, leaving the sources untouched.
    #[inline]
    pub fn cloned(first: &A, second: &B) -> Self
    where
        A: Clone,
        B: Clone,
    {
        Pair::new(first.clone(), second.clone())
    }

    /// Explicitly construct each field from a value of another type.
    ///
    /// ```
    /// use tola_util::{Pair, detect::Construct};
    ///
    /// struct Meters(u32);
    /// impl Construct<u32> for Meters {
    ///     fn construct(source: u32) -> Self { Meters(source) }
    /// }
    ///
    /// let p = Pair::<Meters, u64>::construct(3u32, 4u8);
    /// assert_eq!((p.first.0, p.second), (3, 4));
    /// ```
    #[inline]
    pub fn construct<X, Y>(first: X, second: Y) -> Self
    where
        A: Construct<X>,
        B: Construct<Y>,
    {
        Pair::new(A::construct(first), B::construct(second))
    }

    /// Build from two bindings, keeping each source's value category.
    ///
    /// Transferable sources are taken, persistent ones are copied; the
    /// results then convert into the field types.
    ///
    /// ```
    /// use tola_util::{Pair, transfer::relocate};
    ///
    /// let mut moved = String::from("moved");
    /// let kept = String::from("kept");
    /// let p = Pair::<String, String>::forward(relocate(&mut moved), &kept);
    ///
    /// assert_eq!(p, Pair::new("moved".to_string(), "kept".to_string()));
    /// assert!(moved.is_empty());
    /// assert_eq!(kept, "kept");
    /// ```
    #[inline]
    pub fn forward<X, Y>(first: X, second: Y) -> Self
    where
        X: Binding,
        Y: Binding,
        A: From<X::Target>,
        B: From<Y::Target>,
    {
        Pair::new(A::from(first.resolve()), B::from(second.resolve()))
    }

    /// Convert from a pair of other field types, relocating its fields.
    #[inline]
    pub fn from_pair<X, Y>(other: Pair<X, Y>) -> Self
    where
        A: From<X>,
        B: From<Y>,
    {
        Pair::new(A::from(other.first), B::from(other.second))
    }

    /// Convert from a borrowed pair of other field types, copying its fields.
    #[inline]
    pub fn from_pair_ref<X, Y>(other: &Pair<X, Y>) -> Self
    where
        X: Clone,
        Y: Clone,
        A: From<X>,
        B: From<Y>,
    {
        Pair::new(A::from(other.first.clone()), B::from(other.second.clone()))
    }

    /// Explicitly construct from a pair of other field types, relocating
    /// its fields.
    #[inline]
    pub fn construct_from_pair<X, Y>(other: Pair<X, Y>) -> Self
    where
        A: Construct<X>,
        B: Construct<Y>,
    {
        Pair::construct(other.first, other.second)
    }

    /// Explicitly construct from a borrowed pair of other field types,
    /// copying its fields.
    #[inline]
    pub fn construct_from_pair_ref<X, Y>(other: &Pair<X, Y>) -> Self
    where
        X: Clone,
        Y: Clone,
        A: Construct<X>,
        B: Construct<Y>,
    {
        Pair::construct(other.first.clone(), other.second.clone())
    }

    /// Copy-assign from a pair of the same type.
    ///
    /// Fields are assigned through `clone_from`, so existing allocations
    /// are reused where the field type supports it.
    #[inline]
    pub fn assign(&mut self, source: &Self) -> &mut Self
    where
        A: Clone,
        B: Clone,
    {
        self.first.clone_from(&source.first);
        self.second.clone_from(&source.second);
        self
    }

    /// Relocate-assign from a pair of the same type.
    #[inline]
    pub fn assign_moved(&mut self, source: Self) -> &mut Self {
        self.first = source.first;
        self.second = source.second;
        self
    }

    /// Copy-assign from a pair of other field types.
    #[inline]
    pub fn assign_from_pair<X, Y>(&mut self, source: &Pair<X, Y>) -> &mut Self
    where
        X: Clone,
        Y: Clone,
        A: From<X>,
        B: From<Y>,
    {
        self.first = A::from(source.first.clone());
        self.second = B::from(source.second.clone());
        self
    }

    /// Relocate-assign from a pair of other field types.
    #[inline]
    pub fn assign_from_pair_moved<X, Y>(&mut self, source: Pair<X, Y>) -> &mut Self
    where
        A: From<X>,
        B: From<Y>,
    {
        self.first = A::from(source.first);
        self.second = B::from(source.second);
        self
    }

    /// Exchange both fields with another pair of the same type.
    #[inline]
    pub fn exchange(&mut self, other: &mut Self) {
        transfer::exchange(&mut self.first, &mut other.first);
        transfer::exchange(&mut self.second, &mut other.second);
    }

    /// Borrow both fields.
    #[inline]
    pub fn as_refs(&self) -> Pair<&A, &B> {
        Pair::new(&self.first, &self.second)
    }

    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Default, B: Default> Default for Pair<A, B> {
    #[inline]
    fn default() -> Self {
        Pair::new(A::default(), B::default())
    }
}

/// Build a pair, inferring the field types from the arguments.
///
/// ```
/// use tola_util::make_pair;
///
/// let p = make_pair(1, "x");
/// assert_eq!(p.first, 1);
/// assert_eq!(p.second, "x");
/// ```
#[inline(always)]
pub fn make_pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::from((first, second))
}

mod sealed {
    pub trait Sealed {}
    impl<A, B> Sealed for super::Pair<A, B> {}
}

/// Implemented by [`Pair`] instantiations only.
pub trait PairType: sealed::Sealed {
    type First;
    type Second;
}

impl<A, B> PairType for Pair<A, B> {
    type First = A;
    type Second = B;
}

impl<A: TypeCaps, B: TypeCaps> TypeCaps for Pair<A, B> {
    const IS_DEFAULT: bool = A::IS_DEFAULT && B::IS_DEFAULT;
    const IS_CLONE: bool = A::IS_CLONE && B::IS_CLONE;
    const IS_COPY: bool = A::IS_COPY && B::IS_COPY;
    const IS_DEBUG: bool = A::IS_DEBUG && B::IS_DEBUG;
    const IS_PARTIAL_EQ: bool = A::IS_PARTIAL_EQ && B::IS_PARTIAL_EQ;
    const IS_PARTIAL_ORD: bool = A::IS_PARTIAL_ORD && B::IS_PARTIAL_ORD;
    type IsPair = True;
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::transfer::{relocate, Owned};
    use alloc::string::{String, ToString};

    #[test]
    fn test_default() {
        let p: Pair<i32, String> = Pair::default();
        assert_eq!(p.first, 0);
        assert_eq!(p.second, String::new());
    }

    #[test]
    fn test_cloned_leaves_sources() {
        let a = String::from("a");
        let b = 2u8;
        let p = Pair::cloned(&a, &b);
        assert_eq!(p.first, a);
        assert_eq!(p.second, b);
        assert_eq!(a, "a");
    }

    #[test]
    fn test_forward_owned_and_borrowed() {
        let kept = 5u32;
        let p = Pair::<String, u64>::forward(Owned("s"), &kept);
        assert_eq!(p.first, "s");
        assert_eq!(p.second, 5);
    }

    #[test]
    fn test_relocated_fields() {
        let mut a = String::from("left");
        let mut b = String::from("right");
        let p = Pair::<String, String>::forward(relocate(&mut a), relocate(&mut b));
        assert_eq!(p.into_tuple(), ("left".to_string(), "right".to_string()));
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn test_cross_pair() {
        let small = Pair::new(1u8, 'c');
        let wide = Pair::<u32, char>::from_pair_ref(&small);
        assert_eq!(wide, Pair::new(1u32, 'c'));
        let wider = Pair::<u64, char>::from_pair(wide);
        assert_eq!(wider.first, 1);
    }

    #[test]
    fn test_assign_chain() {
        let mut a = Pair::new(0u32, String::new());
        let mut b = Pair::new(1u32, String::from("b"));
        let c = Pair::new(2u32, String::from("c"));
        a.assign(b.assign(&c));
        assert_eq!(a, c);
        assert_eq!(b, c);
    }

    #[test]
    fn test_assign_from_other_types() {
        let mut p = Pair::new(0i64, String::new());
        p.assign_from_pair(&Pair::new(7i32, "seven"))
            .assign_from_pair_moved(Pair::new(8u8, "eight"));
        assert_eq!(p, Pair::new(8, "eight".to_string()));
    }

    #[test]
    fn test_exchange() {
        let mut p = Pair::new(1, "p");
        let mut q = Pair::new(2, "q");
        p.exchange(&mut q);
        assert_eq!((p.first, p.second, q.first, q.second), (2, "q", 1, "p"));
    }

    #[test]
    fn test_pair_caps() {
        assert!(<Pair<i32, String> as TypeCaps>::IS_DEFAULT);
        assert!(!<Pair<i32, String> as TypeCaps>::IS_COPY);
        assert!(<Pair<i32, &'static str> as TypeCaps>::IS_COPY);
        assert!(crate::detect::is_pair::<Pair<Pair<u8, u8>, u8>>());
    }
}
