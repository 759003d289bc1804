use std::fmt::Debug;
use std::ops::{AddAssign, Mul};

use half::f16;

/// Scalar types the GEMM kernel can multiply.
///
/// An element needs an additive identity to seed the accumulator, a
/// multiplication, and in-place addition. No overflow or NaN handling is
/// layered on top: integer overflow and NaN propagation follow the type's
/// native arithmetic.
pub trait Element:
    Copy + Debug + PartialEq + Mul<Output = Self> + AddAssign + Send + Sync + 'static
{
    /// Short type name used in log records (e.g. "f32").
    const NAME: &'static str;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;
}

macro_rules! impl_element {
    ($($ty:ty => $name:literal, $zero:expr, $one:expr;)*) => {
        $(
            impl Element for $ty {
                const NAME: &'static str = $name;

                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_element! {
    f32 => "f32", 0.0, 1.0;
    f64 => "f64", 0.0, 1.0;
    i32 => "i32", 0, 1;
    i64 => "i64", 0, 1;
    u32 => "u32", 0, 1;
    u64 => "u64", 0, 1;
    f16 => "f16", f16::ZERO, f16::ONE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i64::zero(), 0);
        assert_eq!(u32::one(), 1);
        assert_eq!(f16::zero(), f16::from_f32(0.0));
        assert_eq!(f16::one(), f16::from_f32(1.0));
    }

    #[test]
    fn test_names() {
        assert_eq!(<f32 as Element>::NAME, "f32");
        assert_eq!(<i32 as Element>::NAME, "i32");
        assert_eq!(<f16 as Element>::NAME, "f16");
    }

    #[test]
    fn test_f16_accumulates() {
        let mut acc = f16::zero();
        acc += f16::from_f32(1.5) * f16::from_f32(2.0);
        acc += f16::one();
        assert_eq!(acc.to_f32(), 4.0);
    }
}
