//! Enlist fills collections through chains of calls.
//! It works by wrapping the collection's own append, insert or push method
//! in an [`Inserter`] that forwards every call right away.
//!
//! ```
//! let mut v = Vec::new();
//! enlist::push_back(&mut v).put(1).put(2).put(3).repeat(3, 9);
//! assert_eq!(v, [1, 2, 3, 9, 9, 9]);
//! ```
//!
//! *See code samples for every kind of entry in [examples].*
//!
//! # Element construction
//!
//! Inserters made by [`push_back`], [`push_front`], [`insert`] and [`push`]
//! know the element type of their collection. Their [`Inserter::args`]
//! constructs one element out of all arguments with [`FromArgs`].
//! Inserters over custom injectors made by [`make_inserter`] or
//! [`Inserter::new`] have [`Void`] in place of the element type,
//! and their [`Inserter::args`] injects every argument individually.
//!
//! Both are decided by types alone. Calling [`Inserter::args`] with arguments
//! the element cannot be constructed from doesn't compile:
//!
//! ```compile_fail
//! let mut v = Vec::<u8>::new();
//! enlist::push_back(&mut v).args((1, 2));
//! ```
//!
//! Neither does injecting a default element when there is no element type,
//! whether through [`Inserter::put_default`] or an empty tuple:
//!
//! ```compile_fail
//! let mut v = Vec::<u8>::new();
//! enlist::make_inserter(|x: u8| v.push(x)).put_default();
//! ```
//!
//! ```compile_fail
//! let mut v = Vec::<u8>::new();
//! enlist::make_inserter(|x: u8| v.push(x)).args(());
//! ```
//!
//! Nor passing more than [`MAX_ARGS`] arguments:
//!
//! ```compile_fail
//! let mut v = Vec::<u8>::new();
//! enlist::make_inserter(|x: u8| v.push(x))
//!     .args((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17));
//! ```
//!
//! # Crate features
//!
//! - **`alloc`** *(enabled by default)* – collection traits implemented
//!   for collections of alloc crate.
//! - **`std`** *(enabled by default)* – collection traits implemented for
//!   [`HashSet`] and [`HashMap`]. Enables **`alloc`**.
//! - **`macros`** *(enabled by default)* – [`enlist!`], [`impl_from_args`]
//!   and [`FromArgs`](macro@FromArgs) derive macros.
//! - **`find-enlist`** – finds enlist package to be used in macros
//!   even if it has been renamed in Cargo.toml. **`macros`** feature is required.
//! - **`long-args`** – raises [`MAX_ARGS`] from 12 to 16.
//!
//! [examples]: https://docs.rs/enlist-examples
//! [`HashSet`]: https://doc.rust-lang.org/std/collections/struct.HashSet.html
//! [`HashMap`]: https://doc.rust-lang.org/std/collections/struct.HashMap.html

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(feature = "find-enlist", not(feature = "macros")))]
core::compile_error!(
    r#""find-enlist" feature doesn't do anything unless "macros" feature is enabled"#
);

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod collection;

mod advance;
mod args;
mod directive;
mod inject;
mod inserter;

pub use advance::Advance;
pub use args::{Arguments, FromArgs, MAX_ARGS};
pub use directive::{
    repeat, repeat_fun, repeat_from_to, repeat_from_to_by, Directive, Repeat, RepeatFromTo,
    RepeatFromToBy, RepeatFun,
};
pub use inject::{CallFn, CallInsert, CallPush, CallPushBack, CallPushFront, Inject};
pub use inserter::{Inserter, Void};

use collection::{Insert, Push, PushBack, PushFront};

/// Inserter that adds values at the end of `collection`.
#[inline]
pub fn push_back<C>(collection: &mut C) -> Inserter<CallPushBack<'_, C>, C::Element>
where
    C: PushBack + ?Sized,
{
    Inserter::new(CallPushBack::new(collection)).with_element()
}

/// Inserter that adds values at the beginning of `collection`.
///
/// ```
/// use std::collections::VecDeque;
///
/// let mut deque = VecDeque::from([3]);
/// enlist::push_front(&mut deque).put(2).put(1);
/// assert_eq!(deque, [1, 2, 3]);
/// ```
#[inline]
pub fn push_front<C>(collection: &mut C) -> Inserter<CallPushFront<'_, C>, C::Element>
where
    C: PushFront + ?Sized,
{
    Inserter::new(CallPushFront::new(collection)).with_element()
}

/// Inserter that adds values to a set or a map.
///
/// ```
/// use std::collections::BTreeSet;
///
/// let mut set = BTreeSet::new();
/// enlist::insert(&mut set).put(5).put(5).put(6);
/// assert_eq!(set, BTreeSet::from([5, 6]));
/// ```
#[inline]
pub fn insert<C>(collection: &mut C) -> Inserter<CallInsert<'_, C>, C::Element>
where
    C: Insert + ?Sized,
{
    Inserter::new(CallInsert::new(collection)).with_element()
}

/// Inserter that pushes values onto a stack, a queue or a heap.
#[inline]
pub fn push<C>(collection: &mut C) -> Inserter<CallPush<'_, C>, C::Element>
where
    C: Push + ?Sized,
{
    Inserter::new(CallPush::new(collection)).with_element()
}

/// Inserter that calls `fun` with every value.
///
/// ```
/// let mut log = String::new();
/// enlist::make_inserter(|word: &str| log.push_str(word)).args(("a", "b", "c"));
/// assert_eq!(log, "abc");
/// ```
#[inline]
pub fn make_inserter<F>(fun: F) -> Inserter<CallFn<F>> {
    Inserter::new(CallFn(fun))
}

/// Puts every entry into an inserter from first to last.
///
/// The first argument is either an [`Inserter`] or a mutable reference to one.
/// It is followed by `;` and comma-separated entries. The macro evaluates to the
/// inserter, so it can be stored and used further.
///
/// | entry                               | inserter call               |
/// |-------------------------------------|-----------------------------|
/// | `value`                             | [`put(value)`]              |
/// | `#[default] _`                      | [`put_default()`]           |
/// | `#[args] (a, b, c)`                 | [`args((a, b, c))`]         |
/// | `#[repeat(n)] value`                | [`repeat(n, value)`]        |
/// | `#[repeat_fun(n)] fun`              | [`repeat_fun(n, fun)`]      |
/// | `#[repeat_from_to] from..to`        | [`repeat_from_to(from, to)`]|
/// | `#[repeat_from_to(step = s)] from..to` | [`repeat_from_to_by(from, to, s)`] |
/// | `#[extend] iter`                    | [`extend(iter)`]            |
/// | `#[feed] directive`                 | [`feed(directive)`]         |
///
/// ```
/// let mut v = Vec::new();
/// enlist::enlist!(enlist::push_back(&mut v); 1, 2, #[repeat(2)] 7, #[repeat_from_to] 3..5);
/// assert_eq!(v, [1, 2, 7, 7, 3, 4]);
/// ```
///
/// [`put(value)`]: Inserter::put
/// [`put_default()`]: Inserter::put_default
/// [`args((a, b, c))`]: Inserter::args
/// [`repeat(n, value)`]: Inserter::repeat
/// [`repeat_fun(n, fun)`]: Inserter::repeat_fun
/// [`repeat_from_to(from, to)`]: Inserter::repeat_from_to
/// [`repeat_from_to_by(from, to, s)`]: Inserter::repeat_from_to_by
/// [`extend(iter)`]: Inserter::extend
/// [`feed(directive)`]: Inserter::feed
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use enlist_macros::enlist;

/// Implements [`FromArgs`] for a struct, taking its fields in order.
///
/// Fields annotated with `#[enlist(default)]` are not taken and
/// get [`Default::default`] instead.
///
/// ```
/// #[derive(enlist::FromArgs, Debug, PartialEq)]
/// struct Item {
///     name: &'static str,
///     #[enlist(default)]
///     seen: bool,
///     count: u32,
/// }
///
/// let mut items = Vec::<Item>::new();
/// enlist::push_back(&mut items).args(("pen", 2)).args(("ink", 1));
/// assert_eq!(items[1], Item { name: "ink", seen: false, count: 1 });
/// ```
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use enlist_macros::FromArgs;

/// Implements [`FromArgs`] for every associated function of an inherent impl
/// that is annotated with `#[enlist::constructor]`.
///
/// A constructor must not have a receiver or generic parameters,
/// and must return `Self`.
///
/// *See [examples] for code samples along with impls they expand to.*
///
/// [examples]: https://docs.rs/enlist-examples
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use enlist_macros::impl_from_args;
