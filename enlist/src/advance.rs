/// Values [`Inserter::repeat_from_to_by`] can step through.
///
/// [`Inserter::repeat_from_to_by`]: crate::Inserter::repeat_from_to_by
pub trait Advance: PartialOrd + Clone {
    /// `self + step`, or `None` if it isn't representable.
    fn advance(&self, step: &Self) -> Option<Self>;
}

macro_rules! impl_advance_for_int {
    ($($ty:ty)+) => {
        $(impl Advance for $ty {
            #[inline]
            fn advance(&self, step: &Self) -> Option<Self> {
                self.checked_add(*step)
            }
        })+
    };
}

impl_advance_for_int!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

macro_rules! impl_advance_for_float {
    ($($ty:ty)+) => {
        $(impl Advance for $ty {
            #[inline]
            fn advance(&self, step: &Self) -> Option<Self> {
                Some(self + step)
            }
        })+
    };
}

impl_advance_for_float!(f32 f64);
