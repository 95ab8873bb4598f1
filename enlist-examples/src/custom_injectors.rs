//! Anything implementing [`Inject`] can be wrapped in an [`Inserter`].
//! Such an inserter has no element type and injects each argument
//! of [`Inserter::args`] on its own, so the arguments may differ in type.
//!
//! ```
#![doc = include_str!("custom_injectors/journal.rs")]
//!
//! let mut journal = Journal::default();
//! enlist::Inserter::new(&mut journal)
//!     .args(("started", 3, "jobs"))
//!     .put(0)
//!     .put("failed");
//! assert_eq!(journal.to_string(), "started 3 jobs 0 failed");
//! ```
//!
//! ### Closures
//!
//! [`make_inserter`] is a shorthand for a closure injector.
//!
//! ```
//! let mut total = 0;
//! enlist::make_inserter(|n: u32| total += n).args((1, 2, 3)).repeat(2, 10);
//! assert_eq!(total, 26);
//! ```
//!
//! ### Collections
//!
//! Implementing one of the traits in [`collection`] is enough to get
//! an inserter with an element type from [`push_back`], [`push_front`],
//! [`insert`] or [`push`].
//!
//! ```
#![doc = include_str!("custom_injectors/tally.rs")]
//!
//! let mut tally = Tally::default();
//! enlist::insert(&mut tally).put('a').put('b').repeat(2, 'a');
//! assert_eq!(tally.count('a'), 3);
//! assert_eq!(tally.count('z'), 0);
//! ```
//!
//! [`Inject`]: enlist::Inject
//! [`Inserter`]: enlist::Inserter
//! [`Inserter::args`]: enlist::Inserter::args
//! [`make_inserter`]: enlist::make_inserter
//! [`collection`]: enlist::collection
//! [`push_back`]: enlist::push_back
//! [`push_front`]: enlist::push_front
//! [`insert`]: enlist::insert
//! [`push`]: enlist::push

mod journal;
mod tally;

pub use journal::Journal;
pub use tally::Tally;
