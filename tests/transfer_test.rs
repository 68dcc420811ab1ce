//! Category-preserving forwarding through generic code.

use tola_util::transfer::{
    is_transferable, propagate, relocate, Binding, Owned, Persistent, Transferable,
};
use tola_util::{exchange_array, exchange_range, make_pair, Pair};

/// Generic wrapper that hands its argument on untouched.
fn relay<C, B>(binding: B) -> B::Target
where
    C: tola_util::transfer::Category,
    B: Binding,
{
    propagate::<C, B>(binding).resolve()
}

#[test]
fn test_relay_borrowed_copies() {
    let text = String::from("kept");
    let got = relay::<Persistent, _>(&text);
    assert_eq!(got, "kept");
    assert_eq!(text, "kept");
}

#[test]
fn test_relay_relocated_takes() {
    let mut text = String::from("taken");
    let got = relay::<Transferable, _>(relocate(&mut text));
    assert_eq!(got, "taken");
    assert!(text.is_empty());

    // The source is still a valid value
    text.push_str("again");
    assert_eq!(text, "again");
}

#[test]
fn test_relay_temporary() {
    let got = relay::<Transferable, _>(Owned(vec![1, 2]));
    assert_eq!(got, [1, 2]);
}

#[test]
fn test_categories_of_bindings() {
    assert!(!is_transferable::<&String>());
    assert!(is_transferable::<Owned<String>>());
    assert!(is_transferable::<tola_util::transfer::Moved<'static, String>>());
}

#[test]
fn test_forward_into_pair_through_relay() {
    let mut name = String::from("n");
    let score = 9u8;
    let p = Pair::<String, u32>::forward(
        propagate::<Transferable, _>(relocate(&mut name)),
        propagate::<Persistent, _>(&score),
    );
    assert_eq!(p, make_pair(String::from("n"), 9));
    assert!(name.is_empty());
    assert_eq!(score, 9);
}

#[test]
fn test_exchange_array_of_pairs() {
    let mut a = [make_pair(1, 'a'), make_pair(2, 'b')];
    let mut b = [make_pair(3, 'c'), make_pair(4, 'd')];
    exchange_array(&mut a, &mut b);
    assert_eq!(a, [make_pair(3, 'c'), make_pair(4, 'd')]);
    assert_eq!(b, [make_pair(1, 'a'), make_pair(2, 'b')]);
}

#[test]
fn test_exchange_range_returns_rest() {
    let mut a = vec![String::from("a0"), String::from("a1")];
    let mut b = vec![String::from("b0"), String::from("b1"), String::from("b2")];

    let rest: Vec<_> = exchange_range(a.iter_mut(), b.iter_mut()).collect();
    assert_eq!(rest, [&mut String::from("b2")]);

    assert_eq!(a, ["b0", "b1"]);
    assert_eq!(b, ["a0", "a1", "b2"]);
}

#[test]
fn test_exchange_range_empty_first() {
    let mut a: [u8; 0] = [];
    let mut b = [1u8, 2];
    let rest = exchange_range(a.iter_mut(), b.iter_mut());
    assert_eq!(rest.count(), 2);
    assert_eq!(b, [1, 2]);
}
