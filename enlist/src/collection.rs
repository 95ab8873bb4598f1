//! Verbs a collection can be filled with.
//!
//! Each verb takes exactly one [`Collection::Element`]. Whatever the underlying
//! method returns (like the `bool` of [`BTreeSet::insert`]) is discarded, so
//! duplicates are handled the way the collection itself handles them.
//!
//! [`BTreeSet::insert`]: alloc::collections::BTreeSet::insert

/// Publishes the type of the values a collection holds.
pub trait Collection {
    type Element;
}

/// Adds a value at the end.
pub trait PushBack: Collection {
    fn push_back(&mut self, value: Self::Element);
}

/// Adds a value at the beginning.
pub trait PushFront: Collection {
    fn push_front(&mut self, value: Self::Element);
}

/// Adds a value to a set or a map, wherever the collection puts it.
pub trait Insert: Collection {
    fn insert(&mut self, value: Self::Element);
}

/// Adds a value the way a stack, a queue or a heap does.
pub trait Push: Collection {
    fn push(&mut self, value: Self::Element);
}

impl<C: Collection + ?Sized> Collection for &mut C {
    type Element = C::Element;
}

macro_rules! impl_verb_for_mut {
    ($verb:ident::$method:ident) => {
        impl<C: $verb + ?Sized> $verb for &mut C {
            #[inline]
            fn $method(&mut self, value: Self::Element) {
                C::$method(self, value)
            }
        }
    };
}

impl_verb_for_mut!(PushBack::push_back);
impl_verb_for_mut!(PushFront::push_front);
impl_verb_for_mut!(Insert::insert);
impl_verb_for_mut!(Push::push);

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::{Collection, Insert, Push, PushBack, PushFront};
    use alloc::{
        collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
        string::String,
        vec::Vec,
    };

    macro_rules! impl_verb {
        ([$($generics:tt)*] $verb:ident::$method:ident for $ty:ty => $inherent:ident) => {
            impl<$($generics)*> $verb for $ty {
                #[inline]
                fn $method(&mut self, value: Self::Element) {
                    <$ty>::$inherent(self, value);
                }
            }
        };
    }

    impl<T> Collection for Vec<T> {
        type Element = T;
    }

    impl_verb!([T] PushBack::push_back for Vec<T> => push);
    impl_verb!([T] Push::push for Vec<T> => push);

    impl<T> Collection for VecDeque<T> {
        type Element = T;
    }

    impl_verb!([T] PushBack::push_back for VecDeque<T> => push_back);
    impl_verb!([T] PushFront::push_front for VecDeque<T> => push_front);
    impl_verb!([T] Push::push for VecDeque<T> => push_back);

    impl<T> Collection for LinkedList<T> {
        type Element = T;
    }

    impl_verb!([T] PushBack::push_back for LinkedList<T> => push_back);
    impl_verb!([T] PushFront::push_front for LinkedList<T> => push_front);

    impl<T: Ord> Collection for BinaryHeap<T> {
        type Element = T;
    }

    impl_verb!([T: Ord] Push::push for BinaryHeap<T> => push);

    impl<T: Ord> Collection for BTreeSet<T> {
        type Element = T;
    }

    impl_verb!([T: Ord] Insert::insert for BTreeSet<T> => insert);

    impl<K: Ord, V> Collection for BTreeMap<K, V> {
        type Element = (K, V);
    }

    impl<K: Ord, V> Insert for BTreeMap<K, V> {
        #[inline]
        fn insert(&mut self, (key, value): (K, V)) {
            BTreeMap::insert(self, key, value);
        }
    }

    impl Collection for String {
        type Element = char;
    }

    impl_verb!([] PushBack::push_back for String => push);
    impl_verb!([] Push::push for String => push);
}

#[cfg(feature = "std")]
mod std_impls {
    use super::{Collection, Insert};
    use core::hash::{BuildHasher, Hash};
    use std::collections::{HashMap, HashSet};

    impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
        type Element = T;
    }

    impl<T: Eq + Hash, S: BuildHasher> Insert for HashSet<T, S> {
        #[inline]
        fn insert(&mut self, value: T) {
            HashSet::insert(self, value);
        }
    }

    impl<K: Eq + Hash, V, S: BuildHasher> Collection for HashMap<K, V, S> {
        type Element = (K, V);
    }

    impl<K: Eq + Hash, V, S: BuildHasher> Insert for HashMap<K, V, S> {
        #[inline]
        fn insert(&mut self, (key, value): (K, V)) {
            HashMap::insert(self, key, value);
        }
    }
}
