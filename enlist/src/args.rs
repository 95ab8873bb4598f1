use crate::{inject::Inject, inserter::Void};

/// The largest tuple [`Inserter::args`] accepts.
///
/// It is wider than the five arguments classic list inserters stop at, and
/// matches the largest tuple the standard library implements its traits for.
/// It is 16 with the **`long-args`** feature.
///
/// [`Inserter::args`]: crate::Inserter::args
#[cfg(not(feature = "long-args"))]
pub const MAX_ARGS: usize = 12;

/// The largest tuple [`Inserter::args`] accepts.
///
/// [`Inserter::args`]: crate::Inserter::args
#[cfg(feature = "long-args")]
pub const MAX_ARGS: usize = 16;

/// Constructs a value from a tuple of arguments.
///
/// Every tuple constructs itself. Other types usually get an implementation
/// through `#[derive(FromArgs)]` or `#[impl_from_args]`.
pub trait FromArgs<Args> {
    fn from_args(args: Args) -> Self;
}

/// Injects a tuple of arguments according to the element type `E`.
///
/// When `E` is [`Void`] every argument is injected on its own,
/// otherwise a single `E` is constructed from all of them.
pub trait Arguments<I, E> {
    fn inject_args(self, injector: &mut I);
}

impl FromArgs<()> for () {
    #[inline]
    fn from_args(args: ()) -> Self {
        args
    }
}

impl<I, E> Arguments<I, E> for ()
where
    E: FromArgs<()>,
    I: Inject<E>,
{
    #[inline]
    fn inject_args(self, injector: &mut I) {
        injector.inject(E::from_args(()))
    }
}

macro_rules! impl_args_for_tuple {
    ($($arg:ident),+) => {
        impl<$($arg),+> FromArgs<($($arg,)+)> for ($($arg,)+) {
            #[inline]
            fn from_args(args: ($($arg,)+)) -> Self {
                args
            }
        }

        impl<I, E, $($arg),+> Arguments<I, E> for ($($arg,)+)
        where
            E: FromArgs<($($arg,)+)>,
            I: Inject<E>,
        {
            #[inline]
            fn inject_args(self, injector: &mut I) {
                injector.inject(E::from_args(self))
            }
        }

        impl<I, $($arg),+> Arguments<I, Void> for ($($arg,)+)
        where
            $(I: Inject<$arg>,)+
        {
            #[inline]
            #[allow(non_snake_case)]
            fn inject_args(self, injector: &mut I) {
                let ($($arg,)+) = self;
                $(<I as Inject<$arg>>::inject(injector, $arg);)+
            }
        }
    };
}

macro_rules! impl_args_for_tuples {
    ($($arg:ident)+) => {
        impl_args_for_tuples!(@ [] $($arg)+);
    };
    (@ [$($done:ident)*]) => {};
    (@ [$($done:ident)*] $next:ident $($rest:ident)*) => {
        impl_args_for_tuple!($($done,)* $next);
        impl_args_for_tuples!(@ [$($done)* $next] $($rest)*);
    };
}

impl_args_for_tuples!(A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11 A12);

#[cfg(feature = "long-args")]
impl_args_for_tuple!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
#[cfg(feature = "long-args")]
impl_args_for_tuple!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
#[cfg(feature = "long-args")]
impl_args_for_tuple!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);
#[cfg(feature = "long-args")]
impl_args_for_tuple!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16);
