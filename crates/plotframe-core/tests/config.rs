// File: crates/plotframe-core/tests/config.rs
// Purpose: Frame config loading, defaults and layout building.

use std::io::Write;

use plotframe_core::{FrameConfig, Margin};

#[test]
fn default_config_builds_default_dimensions() {
    let d = FrameConfig::default().build().expect("defaults are valid");
    assert_eq!(d, plotframe_core::Dimensions::default());
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"{{"width": 500, "margin": {{"top": 10, "right": 20, "bottom": 30, "left": 40}}}}"#
    )
    .unwrap();

    let cfg = FrameConfig::from_path(f.path()).expect("load config");
    assert_eq!(cfg.width, 500.0);
    assert_eq!(cfg.height, plotframe_core::types::HEIGHT);
    assert_eq!(cfg.margin, Margin::new(10.0, 20.0, 30.0, 40.0));

    let d = cfg.build().unwrap();
    assert_eq!(d.bounded_width(), 440.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FrameConfig::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, plotframe_core::Error::Io(_)));
}

#[test]
fn invalid_layout_surfaces_on_build() {
    let cfg = FrameConfig { width: 10.0, height: 10.0, margin: Margin::uniform(8.0) };
    assert!(cfg.build().is_err());
}
