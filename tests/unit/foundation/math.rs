use super::*;

#[test]
fn clamps_outside_control_points() {
    let xs = [0.0, 10.0];
    let ys = [1.0, 0.0];
    assert_eq!(interpolate_clamped(-5.0, &xs, &ys, Ease::Linear), 1.0);
    assert_eq!(interpolate_clamped(15.0, &xs, &ys, Ease::Linear), 0.0);
    assert!((interpolate_clamped(5.0, &xs, &ys, Ease::Linear) - 0.5).abs() < 1e-12);
}

#[test]
fn trapezoid_holds_plateau() {
    let xs = [0.0, 15.0, 45.0, 60.0];
    let ys = [1.0, 1.2, 1.2, 1.0];
    assert_eq!(interpolate_clamped(0.0, &xs, &ys, Ease::Linear), 1.0);
    assert!((interpolate_clamped(15.0, &xs, &ys, Ease::Linear) - 1.2).abs() < 1e-12);
    assert!((interpolate_clamped(30.0, &xs, &ys, Ease::Linear) - 1.2).abs() < 1e-12);
    assert_eq!(interpolate_clamped(60.0, &xs, &ys, Ease::Linear), 1.0);
}

#[test]
fn zero_width_segment_takes_right_value() {
    let xs = [0.0, 5.0, 5.0, 10.0];
    let ys = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(interpolate_clamped(5.0, &xs, &ys, Ease::Linear), 2.0);
}

#[test]
fn degenerate_tables_are_total() {
    assert_eq!(interpolate_clamped(1.0, &[], &[], Ease::Linear), 0.0);
    assert_eq!(interpolate_clamped(1.0, &[0.0], &[7.0], Ease::Linear), 7.0);
    assert_eq!(interpolate_clamped(f64::NAN, &[0.0, 1.0], &[3.0, 4.0], Ease::Linear), 3.0);
}

#[test]
fn ease_shapes_each_segment() {
    let xs = [0.0, 10.0];
    let ys = [0.0, 1.0];
    let linear = interpolate_clamped(2.5, &xs, &ys, Ease::Linear);
    let eased = interpolate_clamped(2.5, &xs, &ys, Ease::InOutQuad);
    assert!(eased < linear);
}
