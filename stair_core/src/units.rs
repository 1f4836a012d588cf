//! # Unit Types
//!
//! Lightweight unit wrappers for the metric quantities the engine reports.
//! Simple newtype wrappers are used rather than a full units library because
//! the engine works in a single consistent system (millimetres internally)
//! and JSON serialization should stay clean - just numbers.
//!
//! All intermediate arithmetic is carried out on raw `f64` millimetre values
//! at full precision; rounding happens exactly once, when a quantity is
//! packaged into a [`ReportedLength`] at assembly time.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::units::{Millimeters, Meters, ReportedLength};
//!
//! let run = Millimeters(5300.0);
//! let run_m: Meters = run.into();
//! assert_eq!(run_m.0, 5.3);
//!
//! let reported = ReportedLength::from_raw_mm(5300.4);
//! assert_eq!(reported.mm, 5300.0);
//! assert_eq!(reported.m, 5.3);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimetres per metre - the fixed scale between the base and derived unit
pub const MM_PER_M: f64 = 1000.0;

/// Square millimetres per square metre
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Length in millimetres (base unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres (derived unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_M)
    }
}

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 / MM2_PER_M2)
    }
}

impl From<SquareMeters> for SquareMillimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareMillimeters(m2.0 * MM2_PER_M2)
    }
}

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

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(SquareMeters);

/// Round to 2 decimal digits
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A length reported in both the base unit and the derived larger unit.
///
/// The millimetre field is rounded to the nearest integer; the metre field
/// is derived from the already-rounded millimetre value and rounded to 2
/// decimals, so dividing `mm` by the scale factor always reproduces `m`.
///
/// ## JSON Example
///
/// ```json
/// { "mm": 5300.0, "m": 5.3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportedLength {
    /// Length in millimetres, rounded to the nearest integer
    pub mm: f64,
    /// Length in metres, rounded to 2 decimals
    pub m: f64,
}

impl ReportedLength {
    /// Package a full-precision millimetre value for reporting.
    pub fn from_raw_mm(raw_mm: f64) -> Self {
        let mm = raw_mm.round();
        ReportedLength {
            mm,
            m: round2(mm / MM_PER_M),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let mm = Millimeters(2500.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 2.5);
    }

    #[test]
    fn test_area_conversion() {
        let mm2 = SquareMillimeters(3_500_000.0);
        let m2: SquareMeters = mm2.into();
        assert_eq!(m2.0, 3.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(300.0);
        let b = Millimeters(50.0);
        assert_eq!((a + b).0, 350.0);
        assert_eq!((a - b).0, 250.0);
        assert_eq!((a * 2.0).0, 600.0);
        assert_eq!((a / 2.0).0, 150.0);
    }

    #[test]
    fn test_reported_length_rounding() {
        let reported = ReportedLength::from_raw_mm(5304.6);
        assert_eq!(reported.mm, 5305.0);
        assert_eq!(reported.m, 5.31);
    }

    #[test]
    fn test_reported_length_round_trip() {
        // The metre field must always be re-derivable from the mm field.
        for raw in [0.0, 1.4, 999.5, 1234.5, 5304.6, 123_456.78] {
            let reported = ReportedLength::from_raw_mm(raw);
            assert_eq!(reported.m, round2(reported.mm / MM_PER_M));
        }
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let reported = ReportedLength::from_raw_mm(1250.0);
        let json = serde_json::to_string(&reported).unwrap();
        let roundtrip: ReportedLength = serde_json::from_str(&json).unwrap();
        assert_eq!(reported, roundtrip);
    }
}
