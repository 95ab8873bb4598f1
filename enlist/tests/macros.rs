#![cfg(feature = "macros")]

use enlist::{enlist, impl_from_args, insert, make_inserter, push_back, repeat, FromArgs};
use std::collections::BTreeMap;

#[test]
fn every_entry_kind() {
    let mut next = 0;
    let mut v = Vec::new();
    enlist!(
        push_back(&mut v);
        1,
        #[default] _,
        2,
        #[repeat(2)] 3,
        #[repeat_fun(2)] || {
            next += 1;
            next * 100
        },
        #[repeat_from_to] 4..6,
        #[repeat_from_to(step = 5)] 10..25,
        #[extend] [7, 8],
        #[feed] repeat(1, 9),
    );
    assert_eq!(v, [1, 0, 2, 3, 3, 100, 200, 4, 5, 10, 15, 20, 7, 8, 9]);
}

#[test]
fn empty_entry_list_returns_target() {
    let mut v = vec![1];
    let mut inserter = enlist!(push_back(&mut v));
    inserter.put(2);
    let _ = enlist!(&mut inserter;);
    assert_eq!(v, [1, 2]);
}

#[test]
fn macro_matches_method_chain() {
    let mut by_macro = Vec::new();
    enlist!(push_back(&mut by_macro); 'a', 'b', #[repeat(2)] 'c',);

    let mut by_chain = Vec::new();
    push_back(&mut by_chain).put('a').put('b').repeat(2, 'c');

    let mut separately = Vec::new();
    let mut inserter = push_back(&mut separately);
    inserter.put('a');
    inserter.put('b');
    inserter.repeat(2, 'c');

    assert_eq!(by_macro, by_chain);
    assert_eq!(by_chain, separately);
}

#[test]
fn macro_continues_stored_inserter() {
    let mut v = Vec::new();
    let mut inserter = enlist!(push_back(&mut v); 1, 2);
    enlist!(&mut inserter; 3);
    enlist!(inserter.by_ref(); 4);
    inserter.put(5);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn macro_over_direct_inserter() {
    let mut words = Vec::new();
    enlist!(
        make_inserter(|word: &'static str| words.push(word));
        #[args] ("one", "two"),
        "three",
    );
    assert_eq!(words, ["one", "two", "three"]);
}

#[derive(FromArgs, Debug, PartialEq)]
struct Account {
    name: String,
    #[enlist(default)]
    balance: u64,
    open: bool,
}

#[derive(FromArgs, Debug, PartialEq)]
struct Meters(f64);

#[derive(FromArgs, Debug, PartialEq)]
struct Marker;

#[derive(FromArgs, Debug, PartialEq)]
struct Labeled<'a, T> {
    label: &'a str,
    value: T,
}

#[test]
fn derive_takes_fields_in_order() {
    let mut accounts = Vec::<Account>::new();
    enlist!(push_back(&mut accounts); #[args] (String::from("main"), true));
    assert_eq!(
        accounts,
        [Account {
            name: String::from("main"),
            balance: 0,
            open: true,
        }]
    );

    let mut lengths = Vec::<Meters>::new();
    push_back(&mut lengths).args((1.5,)).put(Meters(2.0));
    assert_eq!(lengths, [Meters(1.5), Meters(2.0)]);

    let mut markers = Vec::<Marker>::new();
    push_back(&mut markers).args(()).args(());
    assert_eq!(markers, [Marker, Marker]);

    let mut labeled = Vec::<Labeled<'_, u8>>::new();
    push_back(&mut labeled).args(("x", 1));
    assert_eq!(labeled, [Labeled { label: "x", value: 1 }]);
}

#[derive(Debug, PartialEq)]
struct Span {
    start: u32,
    end: u32,
}

#[impl_from_args]
impl Span {
    #[enlist::constructor]
    fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[enlist::constructor]
    fn empty() -> Span {
        Self::at(0)
    }

    #[enlist::constructor]
    fn parse(text: &str) -> Self {
        let (start, end) = text.split_once("..").unwrap_or((text, text));
        Self {
            start: start.parse().unwrap_or_default(),
            end: end.parse().unwrap_or_default(),
        }
    }

    fn at(point: u32) -> Self {
        Self {
            start: point,
            end: point,
        }
    }
}

#[test]
fn impl_from_args_uses_each_constructor() {
    let mut spans = Vec::<Span>::new();
    enlist!(
        push_back(&mut spans);
        #[args] (1, 4),
        #[args] (),
        #[args] ("2..9",),
        Span::at(5),
    );
    assert_eq!(
        spans,
        [
            Span { start: 1, end: 4 },
            Span { start: 0, end: 0 },
            Span { start: 2, end: 9 },
            Span { start: 5, end: 5 },
        ]
    );
}

#[derive(Debug, PartialEq)]
struct Entry<T> {
    key: u8,
    value: T,
}

#[impl_from_args]
impl<T: Clone> Entry<T> {
    #[enlist::constructor]
    fn pair(key: u8, value: &T) -> Self {
        Self {
            key,
            value: value.clone(),
        }
    }
}

#[test]
fn generic_impl_from_args() {
    let value = String::from("v");
    let mut entries = Vec::<Entry<String>>::new();
    push_back(&mut entries).args((1, &value)).args((2, &value));
    assert_eq!(entries[1], Entry { key: 2, value });
}

#[test]
fn map_entries_through_macro() {
    let mut map = BTreeMap::new();
    enlist!(insert(&mut map); (1, "a"), #[args] (2, "b"), (1, "c"));
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "c"), (2, "b")]);
}
