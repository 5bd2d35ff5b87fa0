//! Trigon: triangle profile calculations
//!
//! This crate validates that six raw measurements (three side lengths and
//! three interior angles in degrees) describe a constructible triangle, and
//! derives the full metric profile: area, perimeter, side and angle
//! classifications, medians, bisectors, heights, inscribed/circumscribed
//! circle areas, and right-triangle trigonometry.

use thiserror::Error;

pub mod classify;
pub mod constants;
pub mod metrics;
pub mod profile;
pub mod right;
pub mod synthetic;
pub mod triangle;
pub mod validate;

// Re-export commonly used types
pub use classify::{AngleType, SideType};
pub use metrics::{BisectorSet, HeightSet, MedianSet};
pub use profile::{compute_profile, TriangleProfile};
pub use right::RightTriangleDetail;
pub use triangle::TriangleInput;

/// Main error type for the trigon library
#[derive(Debug, Error)]
pub enum TriangleError {
    /// The input failed one or more validation checks. Reasons are collected
    /// in check order and reported together, never truncated to the first.
    #[error("triangle validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl TriangleError {
    /// The ordered list of human-readable failure reasons.
    pub fn reasons(&self) -> &[String] {
        match self {
            TriangleError::Validation(reasons) => reasons,
        }
    }
}

/// Result type for trigon operations
pub type Result<T> = std::result::Result<T, TriangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_smoke() {
        // 3-4-5 right triangle, with the right angle at vertex A
        let input = TriangleInput::new(3.0, 5.0, 4.0, 90.0, 53.13, 36.87);
        let profile = compute_profile(&input).expect("valid triangle rejected");

        assert_eq!(profile.perimeter, 12.0);
        assert_eq!(profile.angle_type, AngleType::Right);
        assert!(profile.right_triangle.is_some());
    }

    #[test]
    fn test_error_reasons_accessor() {
        let err = TriangleError::Validation(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(err.reasons(), ["first", "second"]);
        assert_eq!(err.to_string(), "triangle validation failed: first; second");
    }
}
