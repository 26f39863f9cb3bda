use std::ops::{Add, Div, Mul, Neg, Sub};

/// Explicit float genericity for the kernels. Every kernel is instantiated
/// for the host precisions the surrounding toolchain uses (f32 and f64);
/// integer conversion truncates toward zero like a C cast, saturating at the
/// i32 range instead of invoking undefined behaviour.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn from_i32(v: i32) -> Self;
    fn from_f64(v: f64) -> Self;
    /// Truncation toward zero (C-style cast).
    fn to_i32(self) -> i32;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Round half away from zero, like the host libm `round()`.
    fn round(self) -> Self;
    fn abs(self) -> Self;
    /// 2^self; used to turn a fragpos exponent into an amplitude.
    fn exp2(self) -> Self;
}

macro_rules! impl_real {
    ($t:ty) => {
        impl Real for $t {
            #[inline]
            fn from_i32(v: i32) -> Self { v as $t }
            #[inline]
            fn from_f64(v: f64) -> Self { v as $t }
            #[inline]
            fn to_i32(self) -> i32 { self as i32 }
            #[inline]
            fn floor(self) -> Self { <$t>::floor(self) }
            #[inline]
            fn ceil(self) -> Self { <$t>::ceil(self) }
            #[inline]
            fn round(self) -> Self { <$t>::round(self) }
            #[inline]
            fn abs(self) -> Self { <$t>::abs(self) }
            #[inline]
            fn exp2(self) -> Self { <$t>::exp2(self) }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
