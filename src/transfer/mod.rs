//! # Layer 2: Ownership Transfer
//!
//! Every source a value can be drawn from is a [`Binding`] tagged with a
//! value [`Category`]:
//!
//! | Binding | Category | `resolve()` |
//! |---------|----------|-------------|
//! | `&T` | [`Persistent`] | clones, source untouched |
//! | [`Moved<'_, T>`] | [`Transferable`] | takes, source left as `T::default()` |
//! | [`Owned<T>`] | [`Transferable`] | moves the temporary |
//!
//! [`relocate`] turns a mutable place into a `Moved` view without moving
//! anything; [`propagate`] hands a binding on with its category intact.

mod exchange;

pub use exchange::{exchange, exchange_array, exchange_range};

use core::mem;
use core::ops::Deref;

use crate::primitives::{Bool, False, True};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Persistent {}
    impl Sealed for super::Transferable {}
}

/// Value category of a binding.
pub trait Category: sealed::Sealed + 'static {
    const TRANSFERABLE: bool;
    type IsTransferable: Bool;
}

/// A binding that must stay valid and unchanged unless explicitly copied.
#[derive(Debug, Clone, Copy)]
pub struct Persistent;

/// A binding whose resources the receiver may take.
#[derive(Debug, Clone, Copy)]
pub struct Transferable;

impl Category for Persistent {
    const TRANSFERABLE: bool = false;
    type IsTransferable = False;
}

impl Category for Transferable {
    const TRANSFERABLE: bool = true;
    type IsTransferable = True;
}

/// A source a value can be drawn from.
pub trait Binding: Sized {
    type Target;
    type Category: Category;

    /// Produce the value: copy for persistent bindings, take for
    /// transferable ones.
    fn resolve(self) -> Self::Target;
}

impl<'a, T: Clone> Binding for &'a T {
    type Target = T;
    type Category = Persistent;

    #[inline]
    fn resolve(self) -> T {
        self.clone()
    }
}

/// Transferable view over a place, produced by [`relocate`].
#[derive(Debug)]
#[must_use = "a relocated view does nothing until it is consumed"]
pub struct Moved<'a, T>(&'a mut T);

impl<'a, T> Moved<'a, T> {
    /// Take the value, leaving `T::default()` behind.
    #[inline]
    pub fn take(self) -> T
    where
        T: Default,
    {
        mem::take(self.0)
    }

    /// Take the value, leaving `with` behind.
    #[inline]
    pub fn replace(self, with: T) -> T {
        mem::replace(self.0, with)
    }
}

impl<T> Deref for Moved<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.0
    }
}

impl<'a, T: Default> Binding for Moved<'a, T> {
    type Target = T;
    type Category = Transferable;

    #[inline]
    fn resolve(self) -> T {
        self.take()
    }
}

/// An owned temporary, transferable by definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Owned<T>(pub T);

impl<T> Binding for Owned<T> {
    type Target = T;
    type Category = Transferable;

    #[inline]
    fn resolve(self) -> T {
        self.0
    }
}

/// Mark a place as transferable-from.
///
/// Nothing moves here; the receiver of the returned view decides.
/// Only `&mut` places can be relocated, so a shared (immutable) binding can
/// never be drained this way.
///
/// ```
/// use tola_util::transfer::{relocate, Binding};
///
/// let mut name = String::from("tola");
/// let view = relocate(&mut name);
/// assert_eq!(*view, "tola");
/// let taken = view.resolve();
/// assert_eq!(taken, "tola");
/// assert!(name.is_empty());
/// ```
#[inline(always)]
pub fn relocate<T>(place: &mut T) -> Moved<'_, T> {
    Moved(place)
}

/// Forward a binding while keeping its value category.
///
/// `C` is the category the caller declared. A binding of the other
/// category is rejected at compile time:
///
/// ```compile_fail
/// use tola_util::transfer::{propagate, Transferable};
///
/// let text = String::from("kept");
/// // A borrow cannot be forwarded as if it were transferable.
/// let _ = propagate::<Transferable, _>(&text);
/// ```
///
/// ```compile_fail
/// use tola_util::transfer::{propagate, Owned, Persistent};
///
/// // A temporary cannot be forwarded as a persistent binding.
/// let _ = propagate::<Persistent, _>(Owned(1));
/// ```
#[inline(always)]
pub fn propagate<C: Category, B: Binding>(binding: B) -> B {
    const {
        assert!(
            C::TRANSFERABLE == <B::Category as Category>::TRANSFERABLE,
            "bad propagate: binding category differs from the declared one"
        )
    };
    binding
}

/// Is `B` a transferable binding?
#[inline(always)]
pub const fn is_transferable<B: Binding>() -> bool {
    <B::Category as Category>::TRANSFERABLE
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_relocate_moves_nothing_until_consumed() {
        let mut s = String::from("kept");
        {
            let view = relocate(&mut s);
            assert_eq!(view.len(), 4);
        }
        assert_eq!(s, "kept");
    }

    #[test]
    fn test_replace() {
        let mut s = String::from("old");
        let old = relocate(&mut s).replace(String::from("new"));
        assert_eq!(old, "old");
        assert_eq!(s, "new");
    }

    #[test]
    fn test_categories() {
        assert!(!is_transferable::<&u8>());
        assert!(is_transferable::<Owned<u8>>());
        assert!(is_transferable::<Moved<'static, u8>>());
        assert!(<<<Moved<'static, u8> as Binding>::Category as Category>::IsTransferable as Bool>::VALUE);
    }

    #[test]
    fn test_propagate_keeps_category() {
        let kept = String::from("kept");
        let borrowed = propagate::<Persistent, _>(&kept).resolve();
        assert_eq!(borrowed, kept);

        let mut source = String::from("gone");
        let taken = propagate::<Transferable, _>(relocate(&mut source)).resolve();
        assert_eq!(taken, "gone");
        assert!(source.is_empty());
    }
}
