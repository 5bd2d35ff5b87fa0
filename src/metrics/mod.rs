//! # Metric Engine
//!
//! Closed-form metric formulas over validated triangle measurements:
//! perimeter, Heron area, and the per-vertex median, bisector, and height
//! sets, plus the areas of the inscribed and circumscribed circles.
//!
//! No validation happens here. Every function assumes its input has passed
//! [`crate::validate::validate`]; on unvalidated input the formulas can
//! produce NaN (for example, Heron's square root of a negative product).
//!
//! ## Per-vertex conventions
//!
//! All three sets are ordered triples, one value per vertex A, B, C:
//! - a median uses the two sides meeting at its vertex and the side
//!   opposite that vertex,
//! - a bisector uses the angle at its vertex and the two sides adjacent to
//!   that angle,
//! - a height uses the triangle area and the side opposite its vertex.

use serde::{Deserialize, Serialize};

use crate::constants::DEG2RAD;
use crate::triangle::TriangleInput;

/// Median lengths from each vertex to the midpoint of the opposite side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedianSet {
    /// Median from vertex A
    pub a: f64,
    /// Median from vertex B
    pub b: f64,
    /// Median from vertex C
    pub c: f64,
}

/// Bisector lengths from each vertex along its angle bisector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectorSet {
    /// Bisector from vertex A
    pub a: f64,
    /// Bisector from vertex B
    pub b: f64,
    /// Bisector from vertex C
    pub c: f64,
}

/// Height lengths from each vertex onto the opposite side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSet {
    /// Height from vertex A
    pub a: f64,
    /// Height from vertex B
    pub b: f64,
    /// Height from vertex C
    pub c: f64,
}

/// Perimeter: the plain sum of the three sides, no substitution
pub fn perimeter(input: &TriangleInput) -> f64 {
    input.side_ab + input.side_bc + input.side_ac
}

/// Half of the perimeter (the semiperimeter of Heron's formula)
pub fn half_perimeter(input: &TriangleInput) -> f64 {
    perimeter(input) / 2.0
}

/// Triangle area by Heron's formula
pub fn area(input: &TriangleInput) -> f64 {
    let s = half_perimeter(input);
    (s * (s - input.side_ab) * (s - input.side_bc) * (s - input.side_ac)).sqrt()
}

/// Median lengths for all three vertices
pub fn medians(input: &TriangleInput) -> MedianSet {
    MedianSet {
        a: median(input.side_ab, input.side_ac, input.side_bc),
        b: median(input.side_ab, input.side_bc, input.side_ac),
        c: median(input.side_ac, input.side_bc, input.side_ab),
    }
}

fn median(adjacent1: f64, adjacent2: f64, opposite: f64) -> f64 {
    ((2.0 * adjacent1.powi(2) + 2.0 * adjacent2.powi(2) - opposite.powi(2)) / 4.0).sqrt()
}

/// Bisector lengths for all three vertices
pub fn bisectors(input: &TriangleInput) -> BisectorSet {
    BisectorSet {
        a: bisector(input.angle_a, input.side_ab, input.side_ac),
        b: bisector(input.angle_b, input.side_ab, input.side_bc),
        c: bisector(input.angle_c, input.side_ac, input.side_bc),
    }
}

fn bisector(angle_deg: f64, side1: f64, side2: f64) -> f64 {
    (2.0 * side1 * side2 * (angle_deg / 2.0 * DEG2RAD).cos()) / (side1 + side2)
}

/// Height lengths for all three vertices
pub fn heights(input: &TriangleInput) -> HeightSet {
    let area = area(input);
    HeightSet {
        a: height(area, input.side_bc),
        b: height(area, input.side_ac),
        c: height(area, input.side_ab),
    }
}

fn height(area: f64, opposite_side: f64) -> f64 {
    2.0 * area / opposite_side
}

/// Area of the inscribed circle; the incircle radius is area over
/// semiperimeter
pub fn inscribed_circle_area(input: &TriangleInput) -> f64 {
    let radius = area(input) / half_perimeter(input);
    std::f64::consts::PI * radius.powi(2)
}

/// Area of the circumscribed circle by the law of sines.
///
/// The radius is taken from the AB/angle-A pair. Kept for compatibility
/// with the historical outputs, which always derive the circumradius from
/// this pair.
pub fn circumscribed_circle_area(input: &TriangleInput) -> f64 {
    let radius = input.side_ab / (2.0 * (input.angle_a * DEG2RAD).sin());
    std::f64::consts::PI * radius.powi(2)
}
