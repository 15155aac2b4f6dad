use super::*;

#[test]
fn defaults_match_named_constants() {
    let o = TimingOpts::default();
    assert_eq!(o.exit_window, DEFAULT_EXIT_WINDOW);
    assert_eq!(o.entrance_window, DEFAULT_ENTRANCE_WINDOW);
    assert_eq!(o.pulse_period, DEFAULT_PULSE_PERIOD);
    assert_eq!(o.zoom_ramp_in, DEFAULT_ZOOM_RAMP);
    assert!(o.validate().is_ok());
}

#[test]
fn warning_pulses_harder() {
    let o = TimingOpts::default();
    assert!(o.pulse_peak_for(AnnotationKind::Warning) > o.pulse_peak_for(AnnotationKind::Info));
}

#[test]
fn partial_json_fills_defaults() {
    let o: TimingOpts =
        serde_json::from_str(r#"{"exit_window": 15, "zoom_ease": "out_cubic"}"#).unwrap();
    assert_eq!(o.exit_window, 15);
    assert_eq!(o.zoom_ease, Ease::OutCubic);
    assert_eq!(o.pulse_period, DEFAULT_PULSE_PERIOD);
    assert_eq!(o.spring, Spring::default());
}

#[test]
fn validate_rejects_out_of_range_constants() {
    let bad = [
        TimingOpts {
            exit_window: 0,
            ..TimingOpts::default()
        },
        TimingOpts {
            pulse_period: 0,
            ..TimingOpts::default()
        },
        TimingOpts {
            zoom_peak: 0.5,
            ..TimingOpts::default()
        },
        TimingOpts {
            warning_pulse_peak: f64::NAN,
            ..TimingOpts::default()
        },
        TimingOpts {
            spring: Spring {
                stiffness: -1.0,
                damping: 12.0,
            },
            ..TimingOpts::default()
        },
    ];
    for o in bad {
        assert!(o.validate().is_err(), "{o:?}");
    }
}
