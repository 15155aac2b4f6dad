use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::OutCubic, Ease::InOutQuad];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_out_quad_is_symmetric_around_midpoint() {
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
    let lo = Ease::InOutQuad.apply(0.2);
    let hi = Ease::InOutQuad.apply(0.8);
    assert!((lo + hi - 1.0).abs() < 1e-12);
    assert!(Ease::OutCubic.apply(0.2) > 0.2);
}

#[test]
fn out_of_range_and_nan_inputs_clamp() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(3.0), 1.0);
    assert_eq!(Ease::InOutQuad.apply(f64::NAN), 0.0);
}

#[test]
fn deserializes_snake_case_names() {
    let e: Ease = serde_json::from_str("\"in_out_quad\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
    assert!(serde_json::from_str::<Ease>("\"in_quad\"").is_err());
    assert_eq!(Ease::default(), Ease::Linear);
}
