use crate::{advance::Advance, args::Arguments, directive::Directive, inject::Inject};
use core::{
    fmt,
    marker::PhantomData,
    ops::Range,
};

/// Element type of an inserter that doesn't construct its elements.
///
/// An [`Inserter`] tagged with [`Void`] injects every argument of
/// [`Inserter::args`] on its own. This is what custom injectors with no
/// natural element type get by default.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Void {}

/// Chainable handle around an injector.
///
/// `E` is either the element type of the target collection, in which case
/// [`args`] constructs an `E` from all of its arguments, or [`Void`], in which
/// case [`args`] injects its arguments one after another.
///
/// Nothing is buffered: each call reaches the injector before it returns.
///
/// [`args`]: Inserter::args
pub struct Inserter<I, E = Void> {
    injector: I,
    element: PhantomData<fn() -> E>,
}

impl<I: Clone, E> Clone for Inserter<I, E> {
    fn clone(&self) -> Self {
        Self {
            injector: self.injector.clone(),
            element: PhantomData,
        }
    }
}

impl<I: Copy, E> Copy for Inserter<I, E> {}

impl<I: fmt::Debug, E> fmt::Debug for Inserter<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inserter")
            .field("injector", &self.injector)
            .field("element", &core::any::type_name::<E>())
            .finish()
    }
}

impl<I> Inserter<I> {
    #[inline]
    pub const fn new(injector: I) -> Self {
        Self {
            injector,
            element: PhantomData,
        }
    }
}

impl<I, E> Inserter<I, E> {
    /// Same injector, but multi-argument calls construct `E2` instead.
    #[inline]
    pub fn with_element<E2>(self) -> Inserter<I, E2> {
        Inserter {
            injector: self.injector,
            element: PhantomData,
        }
    }

    /// Same injector, but multi-argument calls inject each argument.
    #[inline]
    pub fn direct(self) -> Inserter<I> {
        self.with_element()
    }

    /// An inserter that injects through this one's injector.
    #[inline]
    pub fn by_ref(&mut self) -> Inserter<&mut I, E> {
        Inserter {
            injector: &mut self.injector,
            element: PhantomData,
        }
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }

    pub fn injector_mut(&mut self) -> &mut I {
        &mut self.injector
    }

    pub fn into_injector(self) -> I {
        self.injector
    }

    /// Injects `E::default()`.
    ///
    /// ```
    /// let mut v = vec![1];
    /// enlist::push_back(&mut v).put_default().put(3);
    /// assert_eq!(v, [1, 0, 3]);
    /// ```
    #[inline]
    pub fn put_default(&mut self) -> &mut Self
    where
        E: Default,
        I: Inject<E>,
    {
        self.injector.inject(E::default());
        self
    }

    #[inline]
    pub fn put<T>(&mut self, value: T) -> &mut Self
    where
        I: Inject<T>,
    {
        self.injector.inject(value);
        self
    }

    /// Injects a tuple of arguments.
    ///
    /// Constructs a single `E` from the whole tuple, or, if `E` is [`Void`],
    /// injects the elements of the tuple from first to last.
    ///
    /// Unlike a classic list inserter, where a single value is always injected
    /// as is, a one-element tuple `(x,)` still constructs `E` through
    /// `FromArgs<(X,)>`. Use [`put`] to inject `x` itself. An empty tuple
    /// constructs `E` through `FromArgs<()>` and never compiles for [`Void`].
    ///
    /// [`put`]: Inserter::put
    ///
    /// ```
    /// let mut pairs = Vec::<(char, u8)>::new();
    /// enlist::push_back(&mut pairs).args(('a', 1)).args(('b', 2));
    /// assert_eq!(pairs, [('a', 1), ('b', 2)]);
    ///
    /// let mut numbers = Vec::<u8>::new();
    /// enlist::push_back(&mut numbers).direct().args((1, 2, 3));
    /// assert_eq!(numbers, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn args<Args>(&mut self, args: Args) -> &mut Self
    where
        Args: Arguments<I, E>,
    {
        args.inject_args(&mut self.injector);
        self
    }

    /// Injects `value` `count` times.
    pub fn repeat<T>(&mut self, count: usize, value: T) -> &mut Self
    where
        T: Clone,
        I: Inject<T>,
    {
        if let Some(clones) = count.checked_sub(1) {
            for _ in 0..clones {
                self.injector.inject(value.clone());
            }
            self.injector.inject(value);
        }
        self
    }

    /// Injects the output of `fun`, calling it anew each of `count` times.
    pub fn repeat_fun<T, F>(&mut self, count: usize, mut fun: F) -> &mut Self
    where
        F: FnMut() -> T,
        I: Inject<T>,
    {
        for _ in 0..count {
            self.injector.inject(fun());
        }
        self
    }

    /// Injects every value from `from` up to, but not including, `to`.
    pub fn repeat_from_to<T>(&mut self, from: T, to: T) -> &mut Self
    where
        Range<T>: Iterator<Item = T>,
        I: Inject<T>,
    {
        self.extend(from..to)
    }

    /// Injects `from`, `from + step`, `from + step + step`
    /// and so on while the value is less than `to`.
    ///
    /// Stepping stops once the next value wouldn't be greater than the
    /// current one, so a zero or negative `step` injects `from` only. It also
    /// stops when the next value overflows `T`.
    ///
    /// ```
    /// let mut v = Vec::new();
    /// enlist::push_back(&mut v).repeat_from_to_by(250u8, 255, 2);
    /// assert_eq!(v, [250, 252, 254]);
    /// ```
    pub fn repeat_from_to_by<T>(&mut self, mut from: T, to: T, step: T) -> &mut Self
    where
        T: Advance,
        I: Inject<T>,
    {
        while from < to {
            let next = from.advance(&step);
            self.injector.inject(from.clone());
            match next {
                Some(next) if next > from => from = next,
                _ => break,
            }
        }
        self
    }

    pub fn extend<It>(&mut self, iter: It) -> &mut Self
    where
        It: IntoIterator,
        I: Inject<It::Item>,
    {
        for value in iter {
            self.injector.inject(value);
        }
        self
    }

    /// Applies a directive like [`repeat`] or [`repeat_fun`].
    ///
    /// [`repeat`]: crate::repeat
    /// [`repeat_fun`]: crate::repeat_fun
    #[inline]
    pub fn feed<D>(&mut self, directive: D) -> &mut Self
    where
        D: Directive<I, E>,
    {
        directive.apply(self);
        self
    }
}
