//! Assignment, exchange and ordering on pairs.

use std::collections::HashSet;

use tola_util::{exchange, make_pair, Pair};

#[test]
fn test_assignment_chains() {
    let source = make_pair(3u16, String::from("three"));
    let mut a: Pair<u16, String> = Pair::default();
    let mut b: Pair<u16, String> = Pair::default();

    // a = b = source
    a.assign(b.assign(&source));
    assert_eq!(a, source);
    assert_eq!(b, source);

    // Converting assignment keeps chaining
    let mut wide: Pair<u64, String> = Pair::default();
    wide.assign_from_pair(&source).first += 1;
    assert_eq!(wide, make_pair(4, String::from("three")));
    assert_eq!(source.second, "three");
}

#[test]
fn test_relocate_assignment() {
    let mut p = make_pair(0u8, String::new());
    let moved = make_pair(5u8, String::from("five"));
    p.assign_moved(moved).second.push('!');
    assert_eq!(p.second, "five!");

    let mut q: Pair<i64, String> = Pair::default();
    q.assign_from_pair_moved(Pair::new(-1i8, "neg"));
    assert_eq!(q, make_pair(-1, String::from("neg")));
}

#[test]
#[allow(clippy::self_assignment, clippy::redundant_clone)]
fn test_self_assignment_keeps_value() {
    let mut p = make_pair(1, String::from("same"));
    p = p;
    assert_eq!(p, make_pair(1, String::from("same")));

    let snapshot = p.clone();
    p.clone_from(&snapshot);
    assert_eq!(p, snapshot);
}

#[test]
fn test_exchange_round_trip() {
    let mut p = make_pair(1, String::from("p"));
    let mut q = make_pair(2, String::from("q"));

    p.exchange(&mut q);
    assert_eq!((p.first, q.first), (2, 1));
    assert_eq!((p.second.as_str(), q.second.as_str()), ("q", "p"));

    exchange(&mut p, &mut q);
    assert_eq!(p, make_pair(1, String::from("p")));
    assert_eq!(q, make_pair(2, String::from("q")));
}

#[test]
fn test_ordering_is_lexicographic() {
    let mut pairs = vec![
        make_pair(2, "b"),
        make_pair(1, "z"),
        make_pair(2, "a"),
        make_pair(1, "a"),
    ];
    pairs.sort();
    assert_eq!(
        pairs,
        [make_pair(1, "a"), make_pair(1, "z"), make_pair(2, "a"), make_pair(2, "b")]
    );

    let (x, y) = (make_pair(1, "b"), make_pair(1, "b"));
    assert!(x <= y && x >= y && !(x < y) && !(x > y));
    assert!(make_pair(0, "z") < make_pair(1, "a"));
    assert!(make_pair(1, "a") != make_pair(1, "b"));
}

#[test]
fn test_as_refs_borrows_fields() {
    let p = make_pair(String::from("left"), vec![1]);
    let r = p.as_refs();
    assert_eq!(r.first.len(), 4);
    assert_eq!(r.second, &vec![1]);
    assert_eq!(p.first, "left");
}

#[test]
fn test_equal_pairs_hash_alike() {
    let mut seen = HashSet::new();
    assert!(seen.insert(make_pair(1, String::from("a"))));
    assert!(!seen.insert(make_pair(1, String::from("a"))));
    assert!(seen.insert(make_pair(1, String::from("b"))));
    assert!(seen.insert(make_pair(2, String::from("a"))));
    assert_eq!(seen.len(), 3);
    assert!(seen.contains(&Pair::new(2, String::from("a"))));
}
