//! In-place exchange.

use core::mem;

/// Exchange the values behind two places.
///
/// The classic three-step exchange through one temporary slot: `a` goes to
/// the slot, `b` moves into `a`, the slot moves into `b`.
#[inline]
pub fn exchange<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

/// Exchange two sequences element-wise.
///
/// Walks `first` to its end, exchanging each element with the next element
/// of `second`, and returns `second` positioned right after the last element
/// it gave up. Stops early if `second` runs out.
///
/// ```
/// use tola_util::transfer::exchange_range;
///
/// let mut a = [1, 2];
/// let mut b = [7, 8, 9];
/// let mut rest = exchange_range(a.iter_mut(), b.iter_mut());
/// assert_eq!(rest.next(), Some(&mut 9));
/// assert_eq!(a, [7, 8]);
/// assert_eq!(b, [1, 2, 9]);
/// ```
pub fn exchange_range<'a, T, I, J>(first: I, mut second: J) -> J
where
    T: 'a,
    I: IntoIterator<Item = &'a mut T>,
    J: Iterator<Item = &'a mut T>,
{
    for a in first {
        match second.next() {
            Some(b) => exchange(a, b),
            None => break,
        }
    }
    second
}

/// Exchange two fixed-size arrays element by element.
///
/// Lengths match by construction; the work goes through [`exchange_range`].
#[inline]
pub fn exchange_array<T, const N: usize>(a: &mut [T; N], b: &mut [T; N]) {
    let _ = exchange_range(a.iter_mut(), b.iter_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_round_trip() {
        let (mut a, mut b) = (3, 4);
        exchange(&mut a, &mut b);
        assert_eq!((a, b), (4, 3));
        exchange(&mut a, &mut b);
        assert_eq!((a, b), (3, 4));
    }

    #[test]
    fn test_exchange_array() {
        let mut a = [1u8, 2, 3];
        let mut b = [4u8, 5, 6];
        exchange_array(&mut a, &mut b);
        assert_eq!(a, [4, 5, 6]);
        assert_eq!(b, [1, 2, 3]);
    }

    #[test]
    fn test_exchange_range_chains() {
        let mut a = [0u8; 2];
        let mut c = [9u8; 1];
        let mut b = [1u8, 2, 3];
        let rest = exchange_range(a.iter_mut(), b.iter_mut());
        let mut rest = exchange_range(c.iter_mut(), rest);
        assert!(rest.next().is_none());
        assert_eq!(b, [0, 0, 9]);
        assert_eq!(a, [1, 2]);
        assert_eq!(c, [3]);
    }

    #[test]
    fn test_exchange_range_short_second() {
        let mut a = [1, 2, 3];
        let mut b = [9];
        let _ = exchange_range(a.iter_mut(), b.iter_mut());
        assert_eq!(a, [9, 2, 3]);
        assert_eq!(b, [1]);
    }
}
