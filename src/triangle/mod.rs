//! # Triangle Input Module
//!
//! Raw triangle measurements as supplied by the caller: three side lengths
//! and three interior angles in degrees. Sides and angles follow the
//! opposite-side convention: angle A is opposite side BC, angle B opposite
//! side AC, and angle C opposite side AB.
//!
//! No geometric invariant is assumed here. The measurements may be mutually
//! inconsistent or describe no triangle at all; [`crate::validate`] is the
//! gate that decides, and nothing downstream of it accepts an unvalidated
//! input.

use serde::{Deserialize, Serialize};

/// Raw measurements of a triangle, prior to validation
///
/// Sides and angles are independently supplied by the caller and may
/// disagree; every derived quantity in this crate is computed only after the
/// full set has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleInput {
    /// Length of segment AB
    pub side_ab: f64,
    /// Length of segment BC
    pub side_bc: f64,
    /// Length of segment AC
    pub side_ac: f64,
    /// Magnitude of angle A in degrees
    pub angle_a: f64,
    /// Magnitude of angle B in degrees
    pub angle_b: f64,
    /// Magnitude of angle C in degrees
    pub angle_c: f64,
}

impl TriangleInput {
    /// Create a new input from three side lengths and three angles in degrees
    pub fn new(
        side_ab: f64,
        side_bc: f64,
        side_ac: f64,
        angle_a: f64,
        angle_b: f64,
        angle_c: f64,
    ) -> Self {
        Self {
            side_ab,
            side_bc,
            side_ac,
            angle_a,
            angle_b,
            angle_c,
        }
    }

    /// The three side lengths in AB, BC, AC order
    pub fn sides(&self) -> [f64; 3] {
        [self.side_ab, self.side_bc, self.side_ac]
    }

    /// The three angle magnitudes in A, B, C order, in degrees
    pub fn angles(&self) -> [f64; 3] {
        [self.angle_a, self.angle_b, self.angle_c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let input = TriangleInput::new(3.0, 5.0, 4.0, 90.0, 53.13, 36.87);
        assert_eq!(input.sides(), [3.0, 5.0, 4.0]);
        assert_eq!(input.angles(), [90.0, 53.13, 36.87]);
    }

    #[test]
    fn test_input_is_plain_data() {
        // Inconsistent measurements are representable; validation is a
        // separate step.
        let input = TriangleInput::new(1.0, 1.0, 10.0, 10.0, 20.0, 30.0);
        assert_eq!(input.side_ac, 10.0);
    }
}
