//! Inserters made by [`push_back`], [`push_front`], [`insert`] and [`push`]
//! construct elements of their collection out of the tuples passed to
//! [`Inserter::args`], using [`FromArgs`].
//!
//! Tuples construct themselves, which makes map entries work out of the box.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! let mut ages = BTreeMap::new();
//! enlist::insert(&mut ages).args(("ann", 31)).args(("bob", 27)).args(("ann", 32));
//! assert_eq!(ages.into_iter().collect::<Vec<_>>(), [("ann", 32), ("bob", 27)]);
//! ```
//!
//! ### Deriving
//!
//! `#[derive(FromArgs)]` takes the fields of a struct in order.
//!
//! ```
#![doc = include_str!("construction/point.rs")]
//!
//! let mut path = Vec::<Point>::new();
//! enlist::push_back(&mut path).args((0, 0)).args((3, 4)).put_default();
//! assert_eq!(path, [Point { x: 0, y: 0 }, Point { x: 3, y: 4 }, Point::default()]);
//! ```
//!
//! ### Defaulted fields
//!
//! Fields annotated with `#[enlist(default)]` are skipped.
//!
//! ```
#![doc = include_str!("construction/task.rs")]
//!
//! let mut tasks = Vec::<Task>::new();
//! enlist::push_back(&mut tasks).args(("write docs", 2)).args(("release", 1));
//! assert!(tasks.iter().all(|task| !task.done));
//! assert_eq!(tasks[1].priority, 1);
//! ```
//!
//! ### Constructor functions
//!
//! `#[enlist::impl_from_args]` implements [`FromArgs`] for every function
//! of the impl annotated with `#[enlist::constructor]`.
//! Each constructor is picked by the types of the arguments.
//!
//! ```
#![doc = include_str!("construction/rgb.rs")]
//!
//! let mut palette = Vec::<Rgb>::new();
//! enlist::push_back(&mut palette)
//!     .args((255, 0, 0))
//!     .args((128,))
//!     .args(("navy",));
//! assert_eq!(palette, [Rgb(255, 0, 0), Rgb(128, 128, 128), Rgb(0, 0, 128)]);
//! ```
//!
//! [`push_back`]: enlist::push_back
//! [`push_front`]: enlist::push_front
//! [`insert`]: enlist::insert
//! [`push`]: enlist::push
//! [`Inserter::args`]: enlist::Inserter::args
//! [`FromArgs`]: enlist::FromArgs

mod point;
mod rgb;
mod task;

pub use point::Point;
pub use rgb::Rgb;
pub use task::Task;
