use crate::{advance::Advance, inject::Inject, inserter::Inserter};
use core::ops::Range;

/// A batch of injections that can be handed to [`Inserter::feed`].
pub trait Directive<I, E> {
    fn apply(self, inserter: &mut Inserter<I, E>);
}

/// Injects `value` `count` times. Made with [`repeat`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Repeat<T> {
    pub count: usize,
    pub value: T,
}

/// Injects the output of `fun`, called anew each of `count` times.
/// Made with [`repeat_fun`].
#[derive(Clone, Copy, Debug)]
pub struct RepeatFun<F> {
    pub count: usize,
    pub fun: F,
}

/// Injects the values of `from..to`. Made with [`repeat_from_to`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RepeatFromTo<T> {
    pub from: T,
    pub to: T,
}

/// Injects `from` and continues by `step` while below `to`.
/// Made with [`repeat_from_to_by`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RepeatFromToBy<T> {
    pub from: T,
    pub to: T,
    pub step: T,
}

/// ```
/// let mut v = vec![1, 2, 3];
/// enlist::push_back(&mut v).feed(enlist::repeat(3, 9));
/// assert_eq!(v, [1, 2, 3, 9, 9, 9]);
/// ```
#[inline]
pub fn repeat<T>(count: usize, value: T) -> Repeat<T> {
    Repeat { count, value }
}

/// ```
/// let mut next = 0;
/// let mut v = Vec::new();
/// enlist::push_back(&mut v).feed(enlist::repeat_fun(3, || {
///     next += 1;
///     next
/// }));
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[inline]
pub fn repeat_fun<F>(count: usize, fun: F) -> RepeatFun<F> {
    RepeatFun { count, fun }
}

#[inline]
pub fn repeat_from_to<T>(from: T, to: T) -> RepeatFromTo<T> {
    RepeatFromTo { from, to }
}

#[inline]
pub fn repeat_from_to_by<T>(from: T, to: T, step: T) -> RepeatFromToBy<T> {
    RepeatFromToBy { from, to, step }
}

impl<I, E, T> Directive<I, E> for Repeat<T>
where
    T: Clone,
    I: Inject<T>,
{
    #[inline]
    fn apply(self, inserter: &mut Inserter<I, E>) {
        inserter.repeat(self.count, self.value);
    }
}

impl<I, E, T, F> Directive<I, E> for RepeatFun<F>
where
    F: FnMut() -> T,
    I: Inject<T>,
{
    #[inline]
    fn apply(self, inserter: &mut Inserter<I, E>) {
        inserter.repeat_fun(self.count, self.fun);
    }
}

impl<I, E, T> Directive<I, E> for RepeatFromTo<T>
where
    Range<T>: Iterator<Item = T>,
    I: Inject<T>,
{
    #[inline]
    fn apply(self, inserter: &mut Inserter<I, E>) {
        inserter.repeat_from_to(self.from, self.to);
    }
}

impl<I, E, T> Directive<I, E> for RepeatFromToBy<T>
where
    T: Advance,
    I: Inject<T>,
{
    #[inline]
    fn apply(self, inserter: &mut Inserter<I, E>) {
        inserter.repeat_from_to_by(self.from, self.to, self.step);
    }
}
