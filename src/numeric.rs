/*!
 * Numerical type definitions
 */

use std::cmp::PartialOrd;
use std::marker::Sized;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A general purpose numeric trait that defines the arithmetic the classifier and its helpers
 * need their element types to support.
 */
pub trait Numeric:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + PartialOrd
    + Sized
    + Clone
    + ZeroOne
{
}

/**
 * Anything which implements all the super traits will automatically implement this trait too.
 * This covers `f32` and `f64`.
 */
impl<T> Numeric for T where
    T: Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + PartialOrd
        + Sized
        + Clone
        + ZeroOne
{
}

/**
 * A trait defining how to obtain 0 and 1 for every implementing type.
 *
 * The boilerplate implementations for primitives is performed with a macro.
 */
pub trait ZeroOne: Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! zero_one_float {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T {
                0.0
            }
            #[inline]
            fn one() -> $T {
                1.0
            }
        }
    };
}

zero_one_float!(f32);
zero_one_float!(f64);

/**
 * Additional traits for more complex numerical operations on real numbers.
 */
pub mod extra {
    use super::Numeric;

    /**
     * A type which can be square rooted.
     */
    pub trait Sqrt {
        type Output;
        fn sqrt(self) -> Self::Output;
    }

    /**
     * A type which can compute e^self.
     */
    pub trait Exp {
        type Output;
        fn exp(self) -> Self::Output;
    }

    /**
     * A type which can compute the natural logarithm of self.
     */
    pub trait Ln {
        type Output;
        fn ln(self) -> Self::Output;
    }

    /**
     * A type which can compute the sine of self.
     */
    pub trait Sin {
        type Output;
        fn sin(self) -> Self::Output;
    }

    /**
     * A type which can compute the cosine of self.
     */
    pub trait Cos {
        type Output;
        fn cos(self) -> Self::Output;
    }

    macro_rules! real_function {
        ($Trait:ident, $method:ident, $T:ty) => {
            impl $Trait for $T {
                type Output = $T;
                #[inline]
                fn $method(self) -> Self::Output {
                    <$T>::$method(self)
                }
            }
        };
    }

    real_function!(Sqrt, sqrt, f32);
    real_function!(Sqrt, sqrt, f64);
    real_function!(Exp, exp, f32);
    real_function!(Exp, exp, f64);
    real_function!(Ln, ln, f32);
    real_function!(Ln, ln, f64);
    real_function!(Sin, sin, f32);
    real_function!(Sin, sin, f64);
    real_function!(Cos, cos, f32);
    real_function!(Cos, cos, f64);

    /**
     * A type which can represent Pi.
     */
    pub trait Pi {
        fn pi() -> Self;
    }

    impl Pi for f32 {
        fn pi() -> f32 {
            std::f32::consts::PI
        }
    }

    impl Pi for f64 {
        fn pi() -> f64 {
            std::f64::consts::PI
        }
    }

    /**
     * A type which can be treated as a real number. Integer types cannot be used here
     * because Gaussian densities and variances are not closed over them.
     */
    pub trait Real:
        Numeric
        + Sqrt<Output = Self>
        + Exp<Output = Self>
        + Ln<Output = Self>
        + Sin<Output = Self>
        + Cos<Output = Self>
        + Pi
    {
        /**
         * NaN is the only value not equal to itself.
         */
        #[allow(clippy::eq_op)]
        fn is_not_a_number(&self) -> bool {
            self != self
        }
    }

    impl<T> Real for T where
        T: Numeric
            + Sqrt<Output = T>
            + Exp<Output = T>
            + Ln<Output = T>
            + Sin<Output = T>
            + Cos<Output = T>
            + Pi
    {
    }
}
