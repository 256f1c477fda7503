use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Sub};

use crate::rings::fraction::Fraction;

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Element usable as a pivot during inversion: needs division and a magnitude
/// that can be compared.
pub trait PivotElement: Element + Div<Output = Self> + PartialOrd {
    fn magnitude(&self) -> Self;
}

macro_rules! impl_pivot_float {
    ($($t:ty),*) => {
        $(
            impl PivotElement for $t {
                #[inline(always)]
                fn magnitude(&self) -> $t {
                    self.abs()
                }
            }
        )*
    };
}

impl_pivot_float!(f32, f64);

impl PivotElement for Fraction {
    fn magnitude(&self) -> Fraction {
        if self.num < num_bigint::BigInt::zero() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!((-2.5f32).magnitude(), 2.5);
        assert_eq!(3.0f64.magnitude(), 3.0);
        assert_eq!((-0.0f32).magnitude(), 0.0);

        let f = "-7/3".parse::<Fraction>().unwrap();
        assert_eq!(f.magnitude(), "7/3".parse::<Fraction>().unwrap());
        assert_eq!(Fraction::zero().magnitude(), Fraction::zero());
    }
}
