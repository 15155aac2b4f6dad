use super::*;

fn callout() -> Annotation {
    Annotation::new("a", AnnotationKind::Callout, 30, 90, Point::new(50.0, 50.0))
}

#[test]
fn defaults_resolve_from_kind() {
    let a = callout();
    assert_eq!(a.size, AnnotationSize::Medium);
    assert_eq!(a.resolved_color(), Some("#2196f3"));
    assert_eq!(a.with_color("#000000").resolved_color(), Some("#000000"));
    assert_eq!(AnnotationKind::Unknown.default_color(), None);
}

#[test]
fn size_multipliers() {
    assert_eq!(AnnotationSize::Small.multiplier(), 0.8);
    assert_eq!(AnnotationSize::Medium.multiplier(), 1.0);
    assert_eq!(AnnotationSize::Large.multiplier(), 1.2);
}

#[test]
fn deserializes_camel_case_frames_and_unknown_kinds() {
    let a: Annotation = serde_json::from_str(
        r#"{"id":"x","kind":"sparkle","startFrame":3,"endFrame":9,"position":{"x":1,"y":2}}"#,
    )
    .unwrap();
    assert_eq!(a.kind, AnnotationKind::Unknown);
    assert_eq!(a.span(), FrameSpan::new(3, 9));
    assert_eq!(a.text, "");
    assert_eq!(a.position, Some(Point::new(1.0, 2.0)));
}

#[test]
fn missing_position_still_deserializes() {
    let a: Annotation = serde_json::from_str(
        r#"{"id":"x","kind":"highlight","start_frame":0,"end_frame":5}"#,
    )
    .unwrap();
    assert!(a.position.is_none());
    assert!(a.validate().is_err());
}

#[test]
fn validate_accepts_well_formed_records() {
    assert!(callout().validate().is_ok());
    let arrow = Annotation::new("b", AnnotationKind::Arrow, 0, 10, Point::new(10.0, 10.0))
        .with_target(Point::new(20.0, 30.0));
    assert!(arrow.validate().is_ok());
    let instant = Annotation::new("c", AnnotationKind::Info, 5, 5, Point::new(1.0, 1.0));
    assert!(instant.validate().is_ok());
}

#[test]
fn validate_rejects_malformed_records() {
    let inverted = Annotation::new("a", AnnotationKind::Info, 10, 5, Point::new(1.0, 1.0));
    assert!(inverted.validate().is_err());

    let arrow = Annotation::new("b", AnnotationKind::Arrow, 0, 10, Point::new(10.0, 10.0));
    assert!(arrow.validate().is_err());

    let nan = Annotation::new("c", AnnotationKind::Info, 0, 10, Point::new(f64::NAN, 1.0));
    assert!(nan.validate().is_err());

    let unnamed = Annotation::new("", AnnotationKind::Info, 0, 10, Point::new(1.0, 1.0));
    assert!(unnamed.validate().is_err());
}

#[test]
fn off_canvas_detection() {
    assert!(!callout().is_off_canvas());
    let a = Annotation::new("a", AnnotationKind::Info, 0, 1, Point::new(120.0, 50.0));
    assert!(a.is_off_canvas());
    let b = Annotation::new("b", AnnotationKind::Arrow, 0, 1, Point::new(10.0, 50.0))
        .with_target(Point::new(10.0, -5.0));
    assert!(b.is_off_canvas());
}
