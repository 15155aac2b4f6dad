use super::*;
use crate::foundation::core::Point;
use crate::timeline::annotation::AnnotationKind;

const TUTORIAL: &str = r##"{
  "fps": { "num": 30, "den": 1 },
  "timing": { "exit_window": 15 },
  "annotations": [
    { "id": "intro", "kind": "callout", "text": "Welcome", "start_frame": 0, "end_frame": 59,
      "position": { "x": 50, "y": 20 } },
    { "id": "focus", "kind": "highlight", "start_frame": 30, "end_frame": 90,
      "position": { "x": 25, "y": 60 }, "size": "large" },
    { "id": "point", "kind": "arrow", "start_frame": 30, "end_frame": 90,
      "position": { "x": 60, "y": 60 }, "target": { "x": 30, "y": 60 }, "color": "#ffffff" }
  ]
}"##;

#[test]
fn parses_and_validates_tutorial_scene() {
    let scene = Scene::from_json_str(TUTORIAL).unwrap();
    scene.validate().unwrap();
    assert_eq!(scene.annotations().len(), 3);
    assert_eq!(scene.fps(), Fps::new(30, 1).unwrap());
    assert_eq!(scene.timing().exit_window, 15);
    assert_eq!(scene.duration_frames(), 91);
    assert_eq!(scene.full_range(), FrameRange::new(0, 91).unwrap());
}

#[test]
fn explicit_duration_wins() {
    let scene = Scene::from_json_str(r#"{ "duration": 300, "annotations": [] }"#).unwrap();
    assert_eq!(scene.duration_frames(), 300);
    assert_eq!(Scene::new(vec![]).duration_frames(), 0);
}

#[test]
fn timing_uses_scene_fps() {
    let scene = Scene::new(vec![]).with_fps(Fps::new(60, 1).unwrap());
    assert_eq!(scene.timing().fps.num, 60);
    let fs = scene.evaluate_frame(30);
    assert!((fs.time_secs - 0.5).abs() < 1e-12);
}

#[test]
fn validate_rejects_duplicates_and_bad_timing() {
    let dup = Scene::new(vec![
        Annotation::new("a", AnnotationKind::Info, 0, 10, Point::new(1.0, 1.0)),
        Annotation::new("a", AnnotationKind::Info, 5, 15, Point::new(2.0, 2.0)),
    ]);
    assert!(dup.validate().is_err());

    let bad_timing = Scene::new(vec![]).with_timing(TimingOpts {
        pulse_period: 0,
        ..TimingOpts::default()
    });
    assert!(bad_timing.validate().is_err());

    let bad_fps = Scene::from_json_str(r#"{ "fps": { "num": 30, "den": 0 } }"#).unwrap();
    assert!(bad_fps.validate().is_err());

    let inverted = Scene::new(vec![Annotation::new(
        "x",
        AnnotationKind::Info,
        10,
        0,
        Point::new(1.0, 1.0),
    )]);
    assert!(inverted.validate().is_err());
}

#[test]
fn off_canvas_positions_pass_validation() {
    let scene = Scene::new(vec![Annotation::new(
        "edge",
        AnnotationKind::Success,
        0,
        10,
        Point::new(-20.0, 140.0),
    )]);
    assert!(scene.validate().is_ok());
}

#[test]
fn unvalidated_scenes_still_evaluate() {
    let scene = Scene::from_json_str(
        r#"{ "annotations": [
            { "id": "a", "kind": "arrow", "start_frame": 0, "end_frame": 10,
              "position": { "x": 1, "y": 1 } },
            { "id": "b", "kind": "glitter", "start_frame": 0, "end_frame": 10 },
            { "id": "c", "kind": "info", "start_frame": 10, "end_frame": 0,
              "position": { "x": 1, "y": 1 } }
        ] }"#,
    )
    .unwrap();
    assert!(scene.validate().is_err());
    for f in -5..20 {
        assert!(scene.evaluate_frame(f).overlays.is_empty());
    }
}

#[test]
fn exit_override_applies_to_evaluation() {
    let mut scene = Scene::from_json_str(TUTORIAL).unwrap();
    let before = scene.evaluate_frame(50).overlays;
    scene.timing_mut().exit_window = 5;
    let after = scene.evaluate_frame(50).overlays;
    let intro = |v: &[crate::timeline::frame::OverlayState]| {
        v.iter().find(|o| o.id == "intro").map(|o| o.opacity).unwrap()
    };
    assert!(intro(&before) < 1.0);
    assert_eq!(intro(&after), 1.0);
}

#[test]
fn json_roundtrip_preserves_annotations() {
    let scene = Scene::from_json_str(TUTORIAL).unwrap();
    let again = Scene::from_json_str(&scene.to_json_string().unwrap()).unwrap();
    assert_eq!(scene.annotations(), again.annotations());
    assert_eq!(again.timing().exit_window, 15);
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = Scene::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, FramelineError::Validation(_)));
}
