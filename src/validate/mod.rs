//! Constructibility and consistency checks for triangle measurements
//!
//! The primary gate, [`validate`], runs every geometric check and reports
//! every failure at once: callers get the complete list of what is wrong
//! with their measurements, not just the first problem found.
//!
//! Two narrower checks live here as well (equal sides must come with equal
//! angles, and an assigned leg/hypotenuse set must satisfy the Pythagorean
//! relation). They only apply after classification has produced a specific
//! shape, so the assembler invokes them at the point in the pipeline where
//! that classification is known.

use crate::constants::{ANGLE_SUM_DEG, PYTHAGOREAN_TOLERANCE};
use crate::triangle::TriangleInput;
use crate::{Result, TriangleError};

/// Failure reason when the triangle inequality does not hold
pub const REASON_SIDES: &str = "one side exceeds the sum of the other two";
/// Failure reason when the interior angles do not sum to 180 degrees
pub const REASON_ANGLE_SUM: &str = "sum of the angles does not equal 180 degrees";
/// Failure reason when equal sides come with unequal angles
pub const REASON_EQUILATERAL_ANGLES: &str =
    "angles of an equilateral triangle must be equal to one another";
/// Failure reason when assigned legs and hypotenuse break the Pythagorean relation
pub const REASON_PYTHAGOREAN: &str =
    "sum of squares of legs does not equal the square of the hypotenuse";

/// Strict triangle inequality: every side is shorter than the sum of the
/// other two. A degenerate (collinear) triangle fails.
pub fn is_triangle(input: &TriangleInput) -> bool {
    input.side_ab + input.side_ac > input.side_bc
        && input.side_ab + input.side_bc > input.side_ac
        && input.side_bc + input.side_ac > input.side_ab
}

/// Interior angles must sum to exactly 180 degrees.
///
/// Exact floating-point equality is deliberate, kept for compatibility with
/// the historical contract: angles are taken as exact degree values, and the
/// sum is compared without an epsilon.
pub fn has_180_degrees(input: &TriangleInput) -> bool {
    input.angle_a + input.angle_b + input.angle_c == ANGLE_SUM_DEG
}

/// The gate before any derived metric: evaluates every constructibility
/// check and collects the reasons of all that failed, in check order.
pub fn validate(input: &TriangleInput) -> Result<()> {
    let mut reasons = Vec::new();

    if !is_triangle(input) {
        reasons.push(REASON_SIDES.to_string());
    }
    if !has_180_degrees(input) {
        reasons.push(REASON_ANGLE_SUM.to_string());
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(TriangleError::Validation(reasons))
    }
}

/// Pairwise equality of the three angles. Sides and angles are supplied
/// independently, so side-equality does not imply this; the assembler checks
/// it once the sides have classified as equilateral.
pub fn has_equal_angles(input: &TriangleInput) -> bool {
    input.angle_a == input.angle_b && input.angle_b == input.angle_c
}

/// Pythagorean relation on an assigned leg/hypotenuse set, within an
/// absolute tolerance on the squared values.
pub fn legs_satisfy_pythagoras(hypotenuse: f64, adjacent_leg: f64, opposite_leg: f64) -> bool {
    let hypotenuse_sq = hypotenuse.powi(2);
    let legs_sq = adjacent_leg.powi(2) + opposite_leg.powi(2);
    (hypotenuse_sq - legs_sq).abs() <= PYTHAGOREAN_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_input_passes() {
        let input = TriangleInput::new(3.0, 5.0, 4.0, 90.0, 53.13, 36.87);
        assert!(validate(&input).is_ok());
    }

    #[rstest]
    #[case(0.0, 5.0, 0.0)] // zero-length sides can never enclose the third
    #[case(1.0, 10.0, 2.0)] // one side longer than the other two combined
    #[case(1.0, 3.0, 2.0)] // collinear: 1 + 2 == 3, strict comparison fails
    fn test_triangle_inequality_failures(#[case] ab: f64, #[case] bc: f64, #[case] ac: f64) {
        let input = TriangleInput::new(ab, bc, ac, 60.0, 60.0, 60.0);
        assert!(!is_triangle(&input));

        let err = validate(&input).unwrap_err();
        assert_eq!(err.reasons(), [REASON_SIDES]);
    }

    #[test]
    fn test_angle_sum_failure() {
        let input = TriangleInput::new(14.14, 19.32, 10.0, 190.0, 30.0, 45.0);
        let err = validate(&input).unwrap_err();
        assert_eq!(err.reasons(), [REASON_ANGLE_SUM]);
    }

    #[test]
    fn test_all_failures_reported_together() {
        // Both the sides and the angles are wrong; both reasons must be
        // present, in check order.
        let input = TriangleInput::new(1.0, 10.0, 2.0, 190.0, 30.0, 45.0);
        let err = validate(&input).unwrap_err();
        assert_eq!(err.reasons(), [REASON_SIDES, REASON_ANGLE_SUM]);
    }

    #[test]
    fn test_angle_sum_is_exact() {
        // 179.9999 is close to 180 but the comparison is exact by contract
        let input = TriangleInput::new(3.0, 5.0, 4.0, 89.9999, 53.13, 36.87);
        assert!(!has_180_degrees(&input));
    }

    #[test]
    fn test_equal_angles() {
        let equal = TriangleInput::new(5.0, 5.0, 5.0, 60.0, 60.0, 60.0);
        assert!(has_equal_angles(&equal));

        let skewed = TriangleInput::new(5.0, 5.0, 5.0, 50.0, 65.0, 65.0);
        assert!(!has_equal_angles(&skewed));
    }

    #[rstest]
    #[case(5.0, 3.0, 4.0, true)] // 25 == 9 + 16
    #[case(5.001, 3.0, 4.0, true)] // off by ~0.01 on the squares, inside 0.1
    #[case(6.0, 3.0, 4.0, false)] // 36 vs 25, far outside tolerance
    fn test_pythagorean_tolerance(
        #[case] hypotenuse: f64,
        #[case] adjacent: f64,
        #[case] opposite: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(legs_satisfy_pythagoras(hypotenuse, adjacent, opposite), expected);
    }
}
