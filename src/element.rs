use crate::display::FormatElement;
use crate::random::RandomElement;

/// Numeric types that can live inside a [`Matrix`](crate::matrix::Matrix) or
/// [`Vector`](crate::vector::Vector).
pub trait Element:
    num::Num
    + Copy
    + std::fmt::Debug
    + PartialOrd
    + std::ops::AddAssign
    + FormatElement
    + RandomElement
    + 'static
{
    /// The additive identity used to seed summations. This is not required to
    /// match `Default::default()`.
    fn semantic_zero() -> Self {
        Self::zero()
    }
}

macro_rules! element {
    ( $( $t:ty ),* ) => {
        $( impl Element for $t {} )*
    };
}

element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
