//! Constants module for triangle calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Sum of the interior angles of a triangle, in degrees
pub const ANGLE_SUM_DEG: f64 = 180.0;
/// Magnitude of a right angle, in degrees
pub const RIGHT_ANGLE_DEG: f64 = 90.0;

// Tolerances
/// Absolute tolerance on the squared side lengths in the Pythagorean check,
/// absorbing the rounding of angles supplied to two decimal places of a degree
pub const PYTHAGOREAN_TOLERANCE: f64 = 0.1;
