//! A value can be injected several times with [`Inserter::repeat`].
//! It is cloned for every injection but the last one.
//!
//! ```
//! let mut row = vec!['|'];
//! enlist::push_back(&mut row).repeat(3, '-').put('|');
//! assert_eq!(row.into_iter().collect::<String>(), "|---|");
//! ```
//!
//! ### Repeating a function
//!
//! [`Inserter::repeat_fun`] calls the function anew for every injection,
//! so stateful functions give a fresh value each time.
//!
//! ```
#![doc = include_str!("repetitions/countdown.rs")]
//!
//! let mut countdown = Countdown::from(3);
//! let mut stack = Vec::new();
//! enlist::push(&mut stack).repeat_fun(4, || countdown.tick());
//! assert_eq!(stack, [3, 2, 1, 0]);
//! ```
//!
//! ### Ranges
//!
//! [`Inserter::repeat_from_to`] injects a half-open range,
//! and [`Inserter::repeat_from_to_by`] does the same with a custom step.
//!
//! ```
//! let mut odd = Vec::new();
//! enlist::push_back(&mut odd).repeat_from_to_by(1, 10, 2).repeat_from_to(20, 20);
//! assert_eq!(odd, [1, 3, 5, 7, 9]);
//! ```
//!
//! ### Directives
//!
//! Repetitions can also be described up front with [`repeat`], [`repeat_fun`],
//! [`repeat_from_to`] and [`repeat_from_to_by`], and applied with [`Inserter::feed`].
//!
//! ```
//! let blank = enlist::repeat(2, "");
//! let mut lines = vec!["header"];
//! enlist::push_back(&mut lines).feed(blank).put("body").feed(blank);
//! assert_eq!(lines, ["header", "", "", "body", "", ""]);
//! ```
//!
//! [`Inserter::repeat`]: enlist::Inserter::repeat
//! [`Inserter::repeat_fun`]: enlist::Inserter::repeat_fun
//! [`Inserter::repeat_from_to`]: enlist::Inserter::repeat_from_to
//! [`Inserter::repeat_from_to_by`]: enlist::Inserter::repeat_from_to_by
//! [`Inserter::feed`]: enlist::Inserter::feed
//! [`repeat`]: enlist::repeat
//! [`repeat_fun`]: enlist::repeat_fun
//! [`repeat_from_to`]: enlist::repeat_from_to
//! [`repeat_from_to_by`]: enlist::repeat_from_to_by

mod countdown;

pub use countdown::Countdown;
