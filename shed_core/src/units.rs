//! # Unit Types
//!
//! Lightweight newtype wrappers for the handful of units the estimator works
//! in. They serialize as bare numbers (`#[serde(transparent)]`) so JSON output
//! stays clean for the checkout and materials-panel consumers.
//!
//! - Length: feet (ft)
//! - Area: square feet (ft²)
//! - Money: dollars
//! - Drawing space: pixels (px), 15 px per foot
//!
//! ## Example
//!
//! ```rust
//! use shed_core::units::{Feet, Pixels, SqFt};
//!
//! let width = Feet(10.0);
//! let depth = Feet(16.0);
//! let floor: SqFt = width * depth;
//! assert_eq!(floor.0, 160.0);
//!
//! let px: Pixels = width.into();
//! assert_eq!(px.0, 150.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// Drawing-space pixels per real-world foot
pub const PIXELS_PER_FOOT: f64 = 15.0;

// ============================================================================
// Length / Area Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

// ============================================================================
// Drawing Units
// ============================================================================

/// Length in drawing-space pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixels(pub f64);

impl From<Feet> for Pixels {
    fn from(ft: Feet) -> Self {
        Pixels(ft.0 * PIXELS_PER_FOOT)
    }
}

impl From<Pixels> for Feet {
    fn from(px: Pixels) -> Self {
        Feet(px.0 / PIXELS_PER_FOOT)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Amount in dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

impl Sum for Dollars {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Dollars(iter.map(|d| d.0).sum())
    }
}

impl std::fmt::Display for Dollars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(SqFt);
impl_arithmetic!(Pixels);
impl_arithmetic!(Dollars);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_pixels() {
        let px: Pixels = Feet(12.0).into();
        assert_eq!(px.0, 180.0);
        let back: Feet = px.into();
        assert_eq!(back.0, 12.0);
    }

    #[test]
    fn test_area() {
        assert_eq!((Feet(12.0) * Feet(28.0)).0, 336.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Dollars(100.0);
        let b = Dollars(40.0);
        assert_eq!((a + b).0, 140.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 0.4).0, 40.0);
        assert_eq!((a / 4.0).0, 25.0);
    }

    #[test]
    fn test_dollars_sum_and_display() {
        let total: Dollars = [Dollars(5.25), Dollars(4.75)].into_iter().sum();
        assert_eq!(total, Dollars(10.0));
        assert_eq!(total.to_string(), "$10.00");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Dollars(7975.0)).unwrap();
        assert_eq!(json, "7975.0");
        let roundtrip: Dollars = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Dollars(7975.0));
    }
}
