use intro_loader::config::MAX_FADE_MS;
use intro_loader::{ConfigError, LoaderConfig, Timeline};

#[test]
fn defaults_match_reference_timeline() {
    let config = LoaderConfig::default();
    assert_eq!(config.timeline, Timeline::default());
    assert_eq!(config.timeline.total_ms(), 3700.0);
    assert_eq!(config.max_device_pixel_ratio, 2.0);
    assert_eq!(config.trail_factor, 0.92);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_is_the_default() {
    let config = LoaderConfig::from_json("{}").unwrap();
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = LoaderConfig::from_json(r#"{"timeline": {"hold_ms": 0}, "grace_ms": 20}"#).unwrap();
    assert_eq!(config.timeline.hold_ms, 0.0);
    assert_eq!(config.timeline.grid_ms, 1100.0);
    assert_eq!(config.grace_ms, 20.0);
    assert_eq!(config.fade_ms, LoaderConfig::default().fade_ms);
}

#[test]
fn negative_duration_is_rejected() {
    let err = LoaderConfig::from_json(r#"{"timeline": {"scaffold_ms": -5}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NegativeDuration { name: "scaffold_ms", .. }), "{err}");
}

#[test]
fn out_of_range_tunables_are_rejected() {
    let cases = [
        (r#"{"grace_ms": -1}"#, "grace"),
        (r#"{"fade_ms": -1}"#, "cross-fade"),
        (r#"{"fade_ms": 1e300}"#, "cross-fade"),
        (r#"{"trail_factor": 0}"#, "trail factor"),
        (r#"{"trail_factor": 1.5}"#, "trail factor"),
        (r#"{"max_device_pixel_ratio": 0.5}"#, "pixel ratio"),
    ];
    for (json, needle) in cases {
        let err = LoaderConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains(needle), "{json}: {err}");
    }
}

#[test]
fn fade_is_bounded() {
    let config = LoaderConfig::from_json(&format!(r#"{{"fade_ms": {MAX_FADE_MS}}}"#)).unwrap();
    assert_eq!(config.fade_ms, MAX_FADE_MS);
    let err = LoaderConfig::from_json(r#"{"fade_ms": 60001}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFade(v) if v == 60_001.0), "{err}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = LoaderConfig::from_json("{timeline:").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    let err = LoaderConfig::from_json(r#"{"grace_ms": "soon"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
