//! Conversion channels into [`Pair`].
//!
//! - [`IntoPair`]: the implicit channel. A bound `P: IntoPair<A, B>` accepts
//!   exactly the sources whose every field *converts* (`From`).
//! - [`ConstructPair`]: the explicit channel. Accepts sources whose every
//!   field is *constructible* ([`Construct`]), which includes all convertible
//!   ones.

use super::Pair;
use crate::detect::Construct;

/// Sources usable where a `Pair<A, B>` is expected.
///
/// ```
/// use tola_util::{IntoPair, Pair};
///
/// fn total(p: impl IntoPair<u64, u64>) -> u64 {
///     let p = p.into_pair();
///     p.first + p.second
/// }
///
/// assert_eq!(total((1u8, 2u32)), 3);
/// assert_eq!(total(Pair::new(4u16, 5u8)), 9);
/// assert_eq!(total(&Pair::new(6u32, 7u32)), 13);
/// ```
pub trait IntoPair<A, B> {
    fn into_pair(self) -> Pair<A, B>;
}

/// Sources a `Pair<A, B>` can be built from on explicit request.
pub trait ConstructPair<A, B> {
    fn construct_pair(self) -> Pair<A, B>;
}

impl<A, B, X, Y> IntoPair<A, B> for (X, Y)
where
    A: From<X>,
    B: From<Y>,
{
    #[inline]
    fn into_pair(self) -> Pair<A, B> {
        Pair::new(A::from(self.0), B::from(self.1))
    }
}

impl<A, B, X, Y> IntoPair<A, B> for Pair<X, Y>
where
    A: From<X>,
    B: From<Y>,
{
    #[inline]
    fn into_pair(self) -> Pair<A, B> {
        Pair::from_pair(self)
    }
}

impl<'p, A, B, X, Y> IntoPair<A, B> for &'p Pair<X, Y>
where
    X: Clone,
    Y: Clone,
    A: From<X>,
    B: From<Y>,
{
    #[inline]
    fn into_pair(self) -> Pair<A, B> {
        Pair::from_pair_ref(self)
    }
}

impl<A, B, X, Y> ConstructPair<A, B> for (X, Y)
where
    A: Construct<X>,
    B: Construct<Y>,
{
    #[inline]
    fn construct_pair(self) -> Pair<A, B> {
        Pair::construct(self.0, self.1)
    }
}

impl<A, B, X, Y> ConstructPair<A, B> for Pair<X, Y>
where
    A: Construct<X>,
    B: Construct<Y>,
{
    #[inline]
    fn construct_pair(self) -> Pair<A, B> {
        Pair::construct_from_pair(self)
    }
}

impl<'p, A, B, X, Y> ConstructPair<A, B> for &'p Pair<X, Y>
where
    X: Clone,
    Y: Clone,
    A: Construct<X>,
    B: Construct<Y>,
{
    #[inline]
    fn construct_pair(self) -> Pair<A, B> {
        Pair::construct_from_pair_ref(self)
    }
}

impl<A, B, X, Y> From<(X, Y)> for Pair<A, B>
where
    A: From<X>,
    B: From<Y>,
{
    #[inline]
    fn from((first, second): (X, Y)) -> Self {
        Pair::new(A::from(first), B::from(second))
    }
}
