//! Every [`Inserter`] method returns the inserter, so calls chain from left to right.
//!
//! ```
//! let mut v = Vec::new();
//! enlist::push_back(&mut v).put(1).put(2).put(3);
//! enlist::push_back(&mut v).repeat(3, 9);
//! assert_eq!(v, [1, 2, 3, 9, 9, 9]);
//! ```
//!
//! ### Comma-separated entries
//!
//! [`enlist!`] puts comma-separated entries into an inserter. Entries with an
//! attribute are dispatched to the matching method.
//!
//! ```
#![doc = include_str!("chaining/week.rs")]
//!
//! assert_eq!(
//!     week(),
//!     ["mon", "tue", "wed", "thu", "fri", "off", "off"],
//! );
//! ```
//!
//! ### Reusing an inserter
//!
//! [`enlist!`] evaluates to the inserter it was given, and also accepts a mutable
//! reference to one. [`Inserter::by_ref`] makes a second inserter that
//! injects through the first one.
//!
//! ```
#![doc = include_str!("chaining/layers.rs")]
//!
//! assert_eq!(layers(), [0, 1, 2, 3, 10, 20, 30, 100]);
//! ```
//!
//! [`Inserter`]: enlist::Inserter
//! [`Inserter::by_ref`]: enlist::Inserter::by_ref
//! [`enlist!`]: enlist::enlist

mod layers;
mod week;

pub use layers::layers;
pub use week::week;
