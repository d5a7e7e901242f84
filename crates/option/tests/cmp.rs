use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use option::O;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equality_matches_both_tags() {
    assert_eq!(O::present(1), O::present(1));
    assert_ne!(O::present(1), O::present(2));
    assert_ne!(O::present(1), O::<i32>::absent());
    assert_ne!(O::<i32>::absent(), O::present(1));
    assert_eq!(O::<i32>::absent(), O::<i32>::absent());
}

#[test]
fn equality_is_an_equivalence() {
    let a = O::present(String::from("x"));
    let b = O::present(String::from("x"));
    let c = O::present(String::from("x"));
    assert_eq!(a, a);
    assert_eq!(a == b, b == a);
    assert!(a == b && b == c && a == c);

    let n1: O<String> = O::absent();
    let n2: O<String> = O::Absent;
    assert_eq!(n1, n2);
    assert_eq!(n2, n1);
}

#[test]
fn present_hashes_like_its_value() {
    assert_eq!(hash_of(&O::present(1)), hash_of(&O::present(1)));
    assert_eq!(hash_of(&O::present(1)), hash_of(&1));
    assert_eq!(hash_of(&O::present("abc")), hash_of(&"abc"));
}

#[test]
fn absent_hash_is_fixed_for_every_t() {
    let ints = hash_of(&O::<i32>::absent());
    let strings = hash_of(&O::<String>::absent());
    let bytes = hash_of(&O::<Vec<u8>>::absent());
    assert_eq!(ints, strings);
    assert_eq!(strings, bytes);
}

#[test]
fn usable_as_set_keys() {
    let mut set = HashSet::new();
    set.insert(O::present(1));
    set.insert(O::present(1));
    set.insert(O::present(2));
    set.insert(O::absent());
    set.insert(O::absent());
    assert_eq!(set.len(), 3);
    assert!(set.contains(&O::Absent));
    assert!(set.contains(&O::Present(2)));
}

#[test]
fn debug_shows_tag_and_payload() {
    assert_eq!(format!("{:?}", O::present(1)), "Present(1)");
    assert_eq!(format!("{:?}", O::present("a")), "Present(\"a\")");
    assert_eq!(format!("{:?}", O::<i32>::absent()), "Absent");
    assert_eq!(format!("{:#?}", O::present(1)), "Present(\n    1,\n)");
    assert_eq!(format!("{:#?}", O::<i32>::absent()), "Absent");
}

#[test]
fn display_shows_tag_and_payload() {
    assert_eq!(O::present("a").to_string(), "Present(a)");
    assert_eq!(O::<u8>::absent().to_string(), "Absent");
}

#[test]
fn absent_carries_no_payload() {
    assert_eq!(std::mem::size_of::<O<()>>(), std::mem::size_of::<Option<()>>());
    assert_eq!(std::mem::size_of::<option::AbsentError>(), 0);
}
