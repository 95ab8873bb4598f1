//! Code samples for [enlist].
//!
//! Each module shows a kind of entry an [`Inserter`] accepts,
//! along with the types it is used with.
//!
//! [enlist]: https://docs.rs/enlist
//! [`Inserter`]: enlist::Inserter

pub mod chaining;
pub mod construction;
pub mod custom_injectors;
pub mod repetitions;
