use enlist::{
    insert, make_inserter, push, push_back, push_front, repeat, repeat_from_to,
    repeat_from_to_by, repeat_fun, Inject, Inserter,
};
use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
};

#[test]
fn chained_puts_then_repeat_append_in_order() {
    let mut v = Vec::new();
    push_back(&mut v).put(1).put(2).put(3);
    assert_eq!(v, [1, 2, 3]);
    push_back(&mut v).repeat(3, 9);
    assert_eq!(v, [1, 2, 3, 9, 9, 9]);
}

#[test]
fn set_absorbs_duplicates() {
    let mut set = BTreeSet::new();
    insert(&mut set).put(5).put(5).put(6);
    assert_eq!(set, BTreeSet::from([5, 6]));

    let mut hash_set = HashSet::new();
    insert(&mut hash_set).put("a").repeat(4, "b").put("a");
    assert_eq!(hash_set, HashSet::from(["a", "b"]));
}

#[test]
fn map_keeps_last_value_per_key() {
    let mut map = HashMap::new();
    insert(&mut map).put((1, 'a')).args((2, 'b')).args((1, 'c'));
    assert_eq!(map, HashMap::from([(1, 'c'), (2, 'b')]));

    let mut ordered = BTreeMap::new();
    insert(&mut ordered).repeat_fun(3, {
        let mut key = 0;
        move || {
            key += 1;
            (key, key * key)
        }
    });
    assert_eq!(ordered.into_iter().collect::<Vec<_>>(), [(1, 1), (2, 4), (3, 9)]);
}

#[test]
fn push_front_reverses_order() {
    let mut deque = VecDeque::from([10]);
    push_front(&mut deque).put(1).put(2).put(3);
    assert_eq!(deque, [3, 2, 1, 10]);

    let mut list = LinkedList::new();
    push_front(&mut list).repeat_from_to(0, 3);
    push_back(&mut list).put(9);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [2, 1, 0, 9]);
}

#[test]
fn push_onto_stack_queue_and_heap() {
    let mut stack = Vec::new();
    push(&mut stack).put('x').put('y');
    assert_eq!(stack.pop(), Some('y'));

    let mut queue = VecDeque::new();
    push(&mut queue).put(1).put(2);
    assert_eq!(queue.pop_front(), Some(1));

    let mut heap = BinaryHeap::new();
    push(&mut heap).put(3).put(7).put(5);
    assert_eq!(heap.into_sorted_vec(), [3, 5, 7]);

    let mut s = String::from("ab");
    push(&mut s).repeat(2, 'c');
    push_back(&mut s).put('d');
    assert_eq!(s, "abccd");
}

#[test]
fn put_default_injects_default_element() {
    let mut v = vec![String::from("a")];
    push_back(&mut v).put_default().put(String::from("b"));
    assert_eq!(v, ["a", "", "b"]);
}

#[derive(Debug, PartialEq)]
struct Pair {
    left: u8,
    right: u8,
}

impl enlist::FromArgs<(u8, u8)> for Pair {
    fn from_args((left, right): (u8, u8)) -> Self {
        Self { left, right }
    }
}

#[test]
fn aggregate_args_construct_one_element() {
    let mut pairs = Vec::<Pair>::new();
    push_back(&mut pairs).args((1, 2));
    assert_eq!(pairs, [Pair { left: 1, right: 2 }]);

    let mut triples = Vec::<(u8, char, bool)>::new();
    push_back(&mut triples).args((1, 'a', true)).args((2, 'b', false));
    assert_eq!(triples.len(), 2);
}

#[test]
fn direct_args_inject_each_in_order() {
    let mut v = vec![0];
    push_back(&mut v).direct().args((1, 2, 3, 4, 5));
    assert_eq!(v, [0, 1, 2, 3, 4, 5]);

    let mut v = Vec::new();
    make_inserter(|x: i32| v.push(x)).args((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12));
    assert_eq!(v, (1..=12).collect::<Vec<_>>());
}

#[test]
fn with_element_switches_to_construction() {
    let mut v = Vec::new();
    make_inserter(|pair: (u8, u8)| v.push(pair))
        .with_element::<(u8, u8)>()
        .args((1, 2))
        .put((3, 4));
    assert_eq!(v, [(1, 2), (3, 4)]);
}

#[test]
fn repeat_zero_is_no_op() {
    let mut v = vec![1];
    let calls = Cell::new(0);
    push_back(&mut v)
        .repeat(0, 5)
        .repeat_fun(0, || {
            calls.set(calls.get() + 1);
            5
        })
        .feed(repeat(0, 5))
        .repeat_from_to(3, 3)
        .repeat_from_to(4, 2)
        .repeat_from_to_by(9, 1, 1);
    assert_eq!(v, [1]);
    assert_eq!(calls.get(), 0);
}

#[test]
fn repeat_fun_is_called_every_time() {
    let calls = Cell::new(0);
    let mut v = Vec::new();
    push_back(&mut v).repeat_fun(4, || {
        calls.set(calls.get() + 1);
        calls.get() * 10
    });
    assert_eq!(calls.get(), 4);
    assert_eq!(v, [10, 20, 30, 40]);
}

#[test]
fn repeat_moves_value_into_last_injection() {
    #[derive(Debug, PartialEq)]
    struct Counted<'a>(&'a Cell<usize>);

    impl Clone for Counted<'_> {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Self(self.0)
        }
    }

    let clones = Cell::new(0);
    let mut v = Vec::new();
    push_back(&mut v).repeat(3, Counted(&clones));
    assert_eq!(v.len(), 3);
    assert_eq!(clones.get(), 2);
}

#[test]
fn range_repeats_stop_before_end() {
    let mut v = Vec::new();
    push_back(&mut v)
        .repeat_from_to(1, 4)
        .repeat_from_to_by(10, 35, 10)
        .feed(repeat_from_to(5, 7))
        .feed(repeat_from_to_by(0, 1, 1));
    assert_eq!(v, [1, 2, 3, 10, 20, 30, 5, 6, 0]);

    let mut halves = Vec::new();
    push_back(&mut halves).repeat_from_to_by(0.0, 2.0, 0.5);
    assert_eq!(halves, [0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn stepped_range_stops_at_type_bounds() {
    let mut bytes = Vec::new();
    push_back(&mut bytes).repeat_from_to_by(250u8, 255, 10);
    assert_eq!(bytes, [250]);

    let mut signed = Vec::new();
    push_back(&mut signed).repeat_from_to_by(i8::MAX - 3, i8::MAX, 2);
    assert_eq!(signed, [i8::MAX - 3, i8::MAX - 1]);

    let mut wide = Vec::new();
    push_back(&mut wide).feed(repeat_from_to_by(u64::MAX - 1, u64::MAX, u64::MAX));
    assert_eq!(wide, [u64::MAX - 1]);
}

#[test]
fn stepped_range_without_progress_injects_start_once() {
    let mut v = Vec::new();
    push_back(&mut v)
        .repeat_from_to_by(3, 10, 0)
        .repeat_from_to_by(-5, 5, -1);
    assert_eq!(v, [3, -5]);

    let mut floats = Vec::new();
    push_back(&mut floats).repeat_from_to_by(0.0, 1.0, f64::NAN);
    assert_eq!(floats, [0.0]);
}

#[test]
fn feed_applies_every_directive() {
    let mut next = 0;
    let mut v = Vec::new();
    push_back(&mut v)
        .feed(repeat(2, 7))
        .feed(repeat_fun(2, || {
            next += 1;
            next
        }))
        .extend([4, 4]);
    assert_eq!(v, [7, 7, 1, 2, 4, 4]);
}

#[test]
fn by_ref_injects_through_the_same_collection() {
    let mut v = Vec::new();
    let mut inserter = push_back(&mut v);
    inserter.put(1);
    inserter.by_ref().put(2).repeat(2, 3);
    inserter.put(4);
    assert_eq!(inserter.injector().collection(), &[1, 2, 3, 3, 4]);
    inserter.injector_mut().collection_mut().clear();
    assert!(v.is_empty());
}

#[test]
fn cloned_inserters_share_injector_semantics() {
    let log = RefCell::new(Vec::new());
    let first = make_inserter(|x: u8| log.borrow_mut().push(x));
    let mut second = first;
    let mut first = first;
    first.put(1);
    second.put(2);
    first.clone().put(3);
    assert_eq!(*log.borrow(), [1, 2, 3]);
}

struct Recorder(Vec<String>);

impl Inject<&str> for Recorder {
    fn inject(&mut self, value: &str) {
        self.0.push(value.to_owned());
    }
}

impl Inject<char> for Recorder {
    fn inject(&mut self, value: char) {
        self.0.push(value.to_string());
    }
}

#[test]
fn custom_injector_takes_mixed_types() {
    let mut inserter = Inserter::new(Recorder(Vec::new()));
    inserter.args(("a", 'b', "c")).put('d');
    assert_eq!(inserter.into_injector().0, ["a", "b", "c", "d"]);

    let mut boxed = Inserter::new(Box::new(Recorder(Vec::new())));
    boxed.put("e");
    assert_eq!(boxed.injector().0, ["e"]);
}
