#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = BodyMapConfig::from_json("{}").unwrap();
    assert_eq!(cfg, BodyMapConfig::default());
    assert_eq!(cfg.min_zoom, 0.5);
    assert_eq!(cfg.max_zoom, 5.0);
    assert_eq!(cfg.zoom_step, 1.2);
    assert_eq!(cfg.near_radius, 30.0);
    assert_eq!(cfg.granularity, Granularity::Coarse);
}

#[test]
fn defaults_validate() {
    assert!(BodyMapConfig::default().validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = BodyMapConfig::from_json(r#"{ "max_zoom": 8.0, "granularity": "fine" }"#).unwrap();
    assert_eq!(cfg.max_zoom, 8.0);
    assert_eq!(cfg.min_zoom, 0.5);
    assert_eq!(cfg.granularity, Granularity::Fine);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = BodyMapConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn unknown_granularity_is_parse_error() {
    let err = BodyMapConfig::from_json(r#"{ "granularity": "medium" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn non_positive_values_rejected() {
    let err = BodyMapConfig::from_json(r#"{ "near_radius": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field: "near_radius", .. }));
    assert_eq!(err.error_code(), "E_CONFIG_NOT_POSITIVE");

    let err = BodyMapConfig::from_json(r#"{ "min_zoom": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field: "min_zoom", .. }));
}

#[test]
fn non_finite_values_rejected() {
    let cfg = BodyMapConfig { overview_width: f64::NAN, ..BodyMapConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { field: "overview_width", .. })));

    let cfg = BodyMapConfig { max_zoom: f64::INFINITY, ..BodyMapConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { field: "max_zoom", .. })));
}

#[test]
fn inverted_zoom_range_rejected() {
    let err = BodyMapConfig::from_json(r#"{ "min_zoom": 3.0, "max_zoom": 2.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZoomRange { .. }));
    assert_eq!(err.to_string(), "min_zoom 3 exceeds max_zoom 2");
}

#[test]
fn equal_zoom_bounds_allowed() {
    assert!(BodyMapConfig::from_json(r#"{ "min_zoom": 2.0, "max_zoom": 2.0 }"#).is_ok());
}

#[test]
fn steps_that_do_not_zoom_rejected() {
    let err = BodyMapConfig::from_json(r#"{ "zoom_step": 1.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Step { field: "zoom_step", .. }));

    let err = BodyMapConfig::from_json(r#"{ "wheel_zoom_in": 0.8 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Step { field: "wheel_zoom_in", .. }));

    let err = BodyMapConfig::from_json(r#"{ "wheel_zoom_out": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Step { field: "wheel_zoom_out", .. }));
    assert_eq!(err.error_code(), "E_CONFIG_STEP");
}

#[test]
fn clamp_zoom_respects_bounds() {
    let cfg = BodyMapConfig::default();
    assert_eq!(cfg.clamp_zoom(0.1), 0.5);
    assert_eq!(cfg.clamp_zoom(10.0), 5.0);
    assert_eq!(cfg.clamp_zoom(2.0), 2.0);
}

#[test]
fn config_serializes_round_trip_shape() {
    let value = serde_json::to_value(BodyMapConfig::default()).unwrap();
    assert_eq!(value["granularity"], "coarse");
    assert_eq!(value["wheel_zoom_out"], 0.9);
}
