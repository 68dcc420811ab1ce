//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// The type-level boolean for a const `bool`.
pub type BoolConstant<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolConstant<C> as Bool>::If<T, E>;

/// Conjunction of two type-level booleans.
pub type And<L, R> = <L as Bool>::And<R>;

/// Disjunction of two type-level booleans.
pub type Or<L, R> = <L as Bool>::Or<R>;

/// Negation of a type-level boolean.
pub type Not<B> = <B as Bool>::Not;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(<And<True, True> as Bool>::VALUE);
        assert!(!<And<True, False> as Bool>::VALUE);
        assert!(<Or<False, True> as Bool>::VALUE);
        assert!(!<Or<False, False> as Bool>::VALUE);
        assert!(<Not<False> as Bool>::VALUE);
    }

    #[test]
    fn test_select() {
        let picked: If<true, u8, &str> = 7;
        assert_eq!(picked, 7u8);
        assert!(!<BoolConstant<false> as Bool>::VALUE);
    }
}
