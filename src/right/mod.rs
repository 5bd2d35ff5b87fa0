//! Right-triangle specialization
//!
//! Runs only for inputs whose angle type classified as right. Assigns the
//! legs and hypotenuse from the position of the 90-degree angle, gates on
//! the Pythagorean relation, and derives the trigonometric ratios.

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, RIGHT_ANGLE_DEG};
use crate::triangle::TriangleInput;
use crate::validate::{legs_satisfy_pythagoras, REASON_PYTHAGOREAN};
use crate::{Result, TriangleError};

/// Legs, hypotenuse, and trigonometric ratios of a right triangle
///
/// The `*_degrees` fields are the plain side ratios (opposite/hypotenuse and
/// so on). The `*_radians` fields scale those same ratios by the
/// degrees-to-radians factor rather than evaluating the angle in radians;
/// this matches the historical output contract and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangleDetail {
    /// Side opposite the right angle
    pub hypotenuse: f64,
    /// Leg adjacent to the reference acute angle
    pub adjacent_leg: f64,
    /// Leg opposite the reference acute angle
    pub opposite_leg: f64,
    /// Sine as a side ratio: opposite leg over hypotenuse
    pub sin_degrees: f64,
    /// The sine ratio scaled by pi/180
    pub sin_radians: f64,
    /// Cosine as a side ratio: adjacent leg over hypotenuse
    pub cos_degrees: f64,
    /// The cosine ratio scaled by pi/180
    pub cos_radians: f64,
    /// Tangent as a side ratio: opposite leg over adjacent leg
    pub tan_degrees: f64,
    /// The tangent ratio scaled by pi/180
    pub tan_radians: f64,
}

/// Compute the right-triangle detail for a validated, right-classified input.
///
/// Fails with the Pythagorean reason when the assigned legs and hypotenuse
/// break `hypotenuse^2 = adjacent^2 + opposite^2` beyond tolerance; in that
/// case the whole profile request aborts rather than returning a partial
/// record.
pub fn right_triangle_detail(input: &TriangleInput) -> Result<RightTriangleDetail> {
    let (adjacent_leg, opposite_leg, hypotenuse) = assign_legs(input);

    if !legs_satisfy_pythagoras(hypotenuse, adjacent_leg, opposite_leg) {
        return Err(TriangleError::Validation(vec![REASON_PYTHAGOREAN.to_string()]));
    }

    let sin_degrees = opposite_leg / hypotenuse;
    let cos_degrees = adjacent_leg / hypotenuse;
    let tan_degrees = opposite_leg / adjacent_leg;

    Ok(RightTriangleDetail {
        hypotenuse,
        adjacent_leg,
        opposite_leg,
        sin_degrees,
        sin_radians: sin_degrees * DEG2RAD,
        cos_degrees,
        cos_radians: cos_degrees * DEG2RAD,
        tan_degrees,
        tan_radians: tan_degrees * DEG2RAD,
    })
}

/// Assign `(adjacent, opposite, hypotenuse)` from the position of the right
/// angle. The hypotenuse is the side opposite the 90-degree angle; the leg
/// roles follow a fixed per-vertex convention, with angle A taking priority
/// over angle B, and angle C as the remaining case.
fn assign_legs(input: &TriangleInput) -> (f64, f64, f64) {
    if input.angle_a == RIGHT_ANGLE_DEG {
        (input.side_ab, input.side_ac, input.side_bc)
    } else if input.angle_b == RIGHT_ANGLE_DEG {
        (input.side_bc, input.side_ab, input.side_ac)
    } else {
        (input.side_bc, input.side_ac, input.side_ab)
    }
}
