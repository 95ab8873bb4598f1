use crate::collection::{Insert, Push, PushBack, PushFront};

/// Adds one value to something the implementor refers to.
pub trait Inject<T> {
    fn inject(&mut self, value: T);
}

impl<T, I> Inject<T> for &mut I
where
    I: Inject<T> + ?Sized,
{
    #[inline]
    fn inject(&mut self, value: T) {
        I::inject(self, value)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T, I> Inject<T> for alloc::boxed::Box<I>
where
    I: Inject<T> + ?Sized,
{
    #[inline]
    fn inject(&mut self, value: T) {
        I::inject(self, value)
    }
}

/// Injects values by calling a closure with each of them.
#[derive(Clone, Copy, Debug)]
pub struct CallFn<F>(pub F);

impl<T, F> Inject<T> for CallFn<F>
where
    F: FnMut(T),
{
    #[inline]
    fn inject(&mut self, value: T) {
        (self.0)(value)
    }
}

macro_rules! call_verb {
    ($(#[$doc:meta])* $name:ident: $verb:ident::$method:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<'a, C: ?Sized> {
            collection: &'a mut C,
        }

        impl<'a, C: ?Sized> $name<'a, C> {
            #[inline]
            pub fn new(collection: &'a mut C) -> Self {
                Self { collection }
            }

            pub fn collection(&self) -> &C {
                self.collection
            }

            pub fn collection_mut(&mut self) -> &mut C {
                self.collection
            }
        }

        impl<'a, C> Inject<C::Element> for $name<'a, C>
        where
            C: $verb + ?Sized,
        {
            #[inline]
            fn inject(&mut self, value: C::Element) {
                self.collection.$method(value)
            }
        }
    };
}

call_verb! {
    /// Injects values with [`PushBack::push_back`].
    CallPushBack: PushBack::push_back
}

call_verb! {
    /// Injects values with [`PushFront::push_front`].
    CallPushFront: PushFront::push_front
}

call_verb! {
    /// Injects values with [`Insert::insert`].
    CallInsert: Insert::insert
}

call_verb! {
    /// Injects values with [`Push::push`].
    CallPush: Push::push
}
