//! Side-type and angle-type classification
//!
//! Pure functions over validated input. Comparisons use exact floating-point
//! equality, matching the validation rules: a side pair counts as equal only
//! when the supplied values are bit-equal, and an angle counts as right only
//! at exactly 90 degrees.

use serde::{Deserialize, Serialize};

use crate::constants::RIGHT_ANGLE_DEG;
use crate::triangle::TriangleInput;

/// Classification of a triangle by its side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideType {
    /// All three sides pairwise distinct
    Scalene,
    /// Exactly two sides equal
    Isosceles,
    /// All three sides equal
    Equilateral,
}

/// Classification of a triangle by its largest angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleType {
    /// All angles below 90 degrees
    Acute,
    /// One angle of exactly 90 degrees
    Right,
    /// One angle above 90 degrees
    Obtuse,
}

/// Classify the triangle by its sides.
///
/// The scalene condition is evaluated first, then equilateral, else
/// isosceles; the order is part of the contract for floating-equality edge
/// cases.
pub fn side_type(input: &TriangleInput) -> SideType {
    if input.side_ab != input.side_bc
        && input.side_bc != input.side_ac
        && input.side_ab != input.side_ac
    {
        SideType::Scalene
    } else if input.side_ab == input.side_bc && input.side_bc == input.side_ac {
        SideType::Equilateral
    } else {
        SideType::Isosceles
    }
}

/// Classify the triangle by its angles.
///
/// The right-angle test runs before the obtuse test; an angle of exactly 90
/// degrees classifies as right regardless of the other angles.
pub fn angle_type(input: &TriangleInput) -> AngleType {
    if input.angle_a == RIGHT_ANGLE_DEG
        || input.angle_b == RIGHT_ANGLE_DEG
        || input.angle_c == RIGHT_ANGLE_DEG
    {
        AngleType::Right
    } else if input.angle_a > RIGHT_ANGLE_DEG
        || input.angle_b > RIGHT_ANGLE_DEG
        || input.angle_c > RIGHT_ANGLE_DEG
    {
        AngleType::Obtuse
    } else {
        AngleType::Acute
    }
}
