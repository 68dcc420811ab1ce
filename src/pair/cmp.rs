//! Comparison operators.
//!
//! `==` (derived: both fields equal) and `<` are the only relations written
//! out; `!=`, `>`, `<=` and `>=` are derived from them by negation or by
//! flipping the arguments. Both sides must be the same `Pair<A, B>`.

use core::cmp::Ordering;

use super::Pair;

impl<A: PartialOrd, B: PartialOrd> PartialOrd for Pair<A, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if self.eq(other) {
            Some(Ordering::Equal)
        } else if other.lt(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    /// Lexicographic: `first` decides unless equal, then `second`.
    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.first < other.first || (self.first == other.first && self.second < other.second)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<A: Ord, B: Ord> Ord for Pair<A, B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.first
            .cmp(&other.first)
            .then_with(|| self.second.cmp(&other.second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Pair<i32, char>; 6] = [
        Pair::new(0, 'a'),
        Pair::new(0, 'b'),
        Pair::new(1, 'a'),
        Pair::new(1, 'a'),
        Pair::new(-3, 'z'),
        Pair::new(2, 'a'),
    ];

    #[test]
    fn test_trichotomy_and_derived_relations() {
        for p in &SAMPLES {
            for q in &SAMPLES {
                let held = [p < q, p == q, q < p].iter().filter(|b| **b).count();
                assert_eq!(held, 1, "{p:?} vs {q:?}");
                assert_eq!(p > q, q < p);
                assert_eq!(p <= q, !(q < p));
                assert_eq!(p >= q, !(p < q));
                assert_eq!(p != q, !(p == q));
                assert_eq!(p.partial_cmp(q), Some(p.cmp(q)));
            }
        }
    }

    #[test]
    fn test_first_field_decides() {
        assert!(Pair::new(0, 'z') < Pair::new(1, 'a'));
        assert!(Pair::new(1, 'a') < Pair::new(1, 'b'));
        assert!(!(Pair::new(1, 'b') < Pair::new(1, 'b')));
    }

    #[test]
    fn test_incomparable_fields() {
        let nan = Pair::new(f64::NAN, 0);
        let one = Pair::new(1.0, 0);
        assert_eq!(nan.partial_cmp(&one), None);
        assert!(nan != nan);
    }
}
