//! End-to-end tests of the profile engine through its public operation

use approx::assert_relative_eq;
use rstest::rstest;

use trigon::constants::DEG2RAD;
use trigon::synthetic::SyntheticTriangleConfig;
use trigon::validate::{
    REASON_ANGLE_SUM, REASON_EQUILATERAL_ANGLES, REASON_PYTHAGOREAN, REASON_SIDES,
};
use trigon::{compute_profile, AngleType, SideType, TriangleInput};

#[test]
fn equilateral_worked_example() {
    let input = TriangleInput::new(5.0, 5.0, 5.0, 60.0, 60.0, 60.0);
    let profile = compute_profile(&input).unwrap();

    assert_eq!(profile.side_type, SideType::Equilateral);
    assert_eq!(profile.angle_type, AngleType::Acute);
    assert_eq!(profile.perimeter, 15.0);
    assert_relative_eq!(
        profile.area,
        25.0 * 3.0_f64.sqrt() / 4.0,
        max_relative = 1e-12
    );
    assert!(profile.right_triangle.is_none());
}

#[test]
fn right_triangle_worked_example() {
    // 3-4-5 with the right angle at A: AB and AC are the legs, BC the
    // hypotenuse.
    let input = TriangleInput::new(3.0, 5.0, 4.0, 90.0, 53.13, 36.87);
    let profile = compute_profile(&input).unwrap();

    assert_eq!(profile.angle_type, AngleType::Right);
    assert_eq!(profile.side_type, SideType::Scalene);

    let detail = profile.right_triangle.expect("missing right detail");
    assert_eq!(detail.hypotenuse, 5.0);
    assert_eq!(detail.adjacent_leg, 3.0);
    assert_eq!(detail.opposite_leg, 4.0);

    assert_relative_eq!(detail.sin_degrees, 0.8);
    assert_relative_eq!(detail.cos_degrees, 0.6);
    assert_relative_eq!(detail.tan_degrees, 4.0 / 3.0);

    // The radian forms scale the degree-form ratio by pi/180.
    assert_relative_eq!(detail.sin_radians, 0.8 * DEG2RAD);
    assert_relative_eq!(detail.cos_radians, 0.6 * DEG2RAD);
    assert_relative_eq!(detail.tan_radians, 4.0 / 3.0 * DEG2RAD);
}

#[rstest]
#[case(5.0, 5.0, 5.0, 60.0, 60.0, 60.0)]
#[case(10.0, 5.0, 10.0, 28.96, 75.52, 75.52)]
#[case(14.14, 19.32, 10.0, 105.0, 30.0, 45.0)]
#[case(3.0, 5.0, 4.0, 90.0, 53.13, 36.87)]
fn perimeter_is_the_exact_side_sum(
    #[case] ab: f64,
    #[case] bc: f64,
    #[case] ac: f64,
    #[case] a: f64,
    #[case] b: f64,
    #[case] c: f64,
) {
    let input = TriangleInput::new(ab, bc, ac, a, b, c);
    let profile = compute_profile(&input).unwrap();
    assert_eq!(profile.perimeter, ab + bc + ac);
}

#[test]
fn obtuse_triangle_classifies_obtuse() {
    let input = TriangleInput::new(14.14, 19.32, 10.0, 105.0, 30.0, 45.0);
    let profile = compute_profile(&input).unwrap();

    assert_eq!(profile.angle_type, AngleType::Obtuse);
    assert_eq!(profile.side_type, SideType::Scalene);
    assert!(profile.right_triangle.is_none());
}

#[test]
fn heights_recover_the_area() {
    let inputs = SyntheticTriangleConfig::new()
        .with_count(200)
        .with_seed(424242)
        .generate();

    for input in &inputs {
        let profile = compute_profile(input).unwrap();
        assert_relative_eq!(
            profile.heights.a * input.side_bc / 2.0,
            profile.area,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            profile.heights.b * input.side_ac / 2.0,
            profile.area,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            profile.heights.c * input.side_ab / 2.0,
            profile.area,
            max_relative = 1e-12
        );
    }
}

#[test]
fn degenerate_sides_fail_with_the_inequality_reason() {
    let input = TriangleInput::new(0.0, 5.0, 0.0, 60.0, 60.0, 60.0);
    let err = compute_profile(&input).unwrap_err();
    assert!(err.reasons().contains(&REASON_SIDES.to_string()));
}

#[test]
fn all_gate_failures_are_reported_together_in_order() {
    // Sides that break the inequality and angles that sum to 265: both
    // reasons must come back from one call, inequality first.
    let input = TriangleInput::new(1.0, 10.0, 2.0, 190.0, 30.0, 45.0);
    let err = compute_profile(&input).unwrap_err();
    assert_eq!(err.reasons(), [REASON_SIDES, REASON_ANGLE_SUM]);
}

#[test]
fn angle_sum_failure_alone() {
    let input = TriangleInput::new(14.14, 19.32, 10.0, 190.0, 30.0, 45.0);
    let err = compute_profile(&input).unwrap_err();
    assert_eq!(err.reasons(), [REASON_ANGLE_SUM]);
}

#[test]
fn equilateral_sides_with_unequal_angles_are_rejected() {
    // Both basic checks pass; the classification consistency check fires.
    let input = TriangleInput::new(5.0, 5.0, 5.0, 50.0, 65.0, 65.0);
    let err = compute_profile(&input).unwrap_err();
    assert_eq!(err.reasons(), [REASON_EQUILATERAL_ANGLES]);
}

#[test]
fn pythagorean_mismatch_aborts_the_request() {
    let input = TriangleInput::new(3.0, 5.5, 4.0, 90.0, 53.13, 36.87);
    let err = compute_profile(&input).unwrap_err();
    assert_eq!(err.reasons(), [REASON_PYTHAGOREAN]);
}

#[test]
fn synthetic_inputs_produce_full_profiles() {
    let inputs = SyntheticTriangleConfig::new().with_count(100).generate();

    for input in &inputs {
        let profile = compute_profile(input).unwrap();
        assert!(profile.area > 0.0);
        assert!(profile.inscribed_circle_area > 0.0);
        assert!(profile.circumscribed_circle_area > 0.0);
        assert!(profile.medians.a > 0.0 && profile.bisectors.a > 0.0 && profile.heights.a > 0.0);
    }
}
