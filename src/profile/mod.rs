//! Profile assembly
//!
//! [`compute_profile`] is the one public operation of the engine: it runs
//! the validation gate, the classifiers, the metric formulas, and (for right
//! triangles) the specializer, in a fixed order, and returns the aggregate
//! record. Any validation failure aborts the request with the reasons
//! accumulated up to that point; metrics past a failure point are never
//! computed or returned.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classify::{self, AngleType, SideType};
use crate::metrics::{self, BisectorSet, HeightSet, MedianSet};
use crate::right::{self, RightTriangleDetail};
use crate::triangle::TriangleInput;
use crate::validate::{self, REASON_EQUILATERAL_ANGLES};
use crate::{Result, TriangleError};

/// The complete metric profile of a validated triangle
///
/// Constructed once per request and immutable afterwards; the caller owns
/// the record exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleProfile {
    /// Area by Heron's formula
    pub area: f64,
    /// Sum of the three side lengths
    pub perimeter: f64,
    /// Classification by sides
    pub side_type: SideType,
    /// Classification by angles
    pub angle_type: AngleType,
    /// Median lengths per vertex
    pub medians: MedianSet,
    /// Bisector lengths per vertex
    pub bisectors: BisectorSet,
    /// Height lengths per vertex
    pub heights: HeightSet,
    /// Area of the inscribed circle
    pub inscribed_circle_area: f64,
    /// Area of the circumscribed circle
    pub circumscribed_circle_area: f64,
    /// Right-triangle detail; present only when the angle type is right
    pub right_triangle: Option<RightTriangleDetail>,
}

/// Compute the full profile of a triangle from its raw measurements.
///
/// Call order: validation gate, angle classification, side classification,
/// the equilateral angle cross-check, base metrics, the right-triangle
/// specializer (which can still abort on the Pythagorean check), then the
/// remaining derived metrics.
pub fn compute_profile(input: &TriangleInput) -> Result<TriangleProfile> {
    validate::validate(input)?;

    let angle_type = classify::angle_type(input);
    let side_type = classify::side_type(input);
    debug!(
        "classified sides {:?} angles {:?}: {:?}, {:?}",
        input.sides(),
        input.angles(),
        side_type,
        angle_type
    );

    if side_type == SideType::Equilateral && !validate::has_equal_angles(input) {
        return Err(TriangleError::Validation(vec![
            REASON_EQUILATERAL_ANGLES.to_string(),
        ]));
    }

    let area = metrics::area(input);
    let perimeter = metrics::perimeter(input);

    let right_triangle = if angle_type == AngleType::Right {
        Some(right::right_triangle_detail(input)?)
    } else {
        None
    };

    Ok(TriangleProfile {
        area,
        perimeter,
        side_type,
        angle_type,
        medians: metrics::medians(input),
        bisectors: metrics::bisectors(input),
        heights: metrics::heights(input),
        inscribed_circle_area: metrics::inscribed_circle_area(input),
        circumscribed_circle_area: metrics::circumscribed_circle_area(input),
        right_triangle,
    })
}
