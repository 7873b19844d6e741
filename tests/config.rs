use harmonic_lab::config::{LabConfig, PlotLayout};
use harmonic_lab::{FilterKind, LabError, SignalSettings};

#[test]
fn presets_are_valid() {
    SignalSettings::lowpass().validate().unwrap();
    SignalSettings::smoothing().validate().unwrap();
    assert_eq!(LabConfig::lowpass().layout, PlotLayout::Overlay);
    assert_eq!(LabConfig::smoothing().layout, PlotLayout::Split);
}

#[test]
fn yaml_round_trip_keeps_preset() {
    let preset = SignalSettings::smoothing();
    let text = serde_yaml::to_string(&preset).unwrap();
    assert!(text.contains("moving_average"));
    let back = SignalSettings::from_yaml_str(&text).unwrap();
    assert_eq!(back, preset);
}

#[test]
fn initial_value_outside_range_rejected() {
    let mut s = SignalSettings::lowpass();
    s.ranges.amplitude.initial = 9.0;
    let text = serde_json::to_string(&s).unwrap();
    match SignalSettings::from_json_str(&text) {
        Err(LabError::InvalidRange { name, .. }) => assert_eq!(name, "amplitude"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn load_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = SignalSettings::lowpass();
    s.noise_seed = Some(9);
    s.filter_order = 3;

    let json = dir.path().join("lab.json");
    std::fs::write(&json, serde_json::to_string_pretty(&s).unwrap()).unwrap();
    assert_eq!(SignalSettings::load(&json).unwrap(), s);

    let yaml = dir.path().join("lab.yaml");
    s.save_yaml(&yaml).unwrap();
    assert_eq!(SignalSettings::load(&yaml).unwrap(), s);
}

#[test]
fn unreadable_settings_file_keeps_preset() {
    let cfg = LabConfig::smoothing().with_settings_file("/nonexistent/harmonic_lab.yaml");
    assert_eq!(cfg.settings, SignalSettings::smoothing());
}

#[test]
fn unavailable_initial_filter_falls_back() {
    let mut s = SignalSettings::smoothing();
    s.filter = FilterKind::Butterworth;
    assert_eq!(s.initial_filter().kind, FilterKind::None);
}

#[test]
fn negative_variance_range_rejected() {
    let mut s = SignalSettings::lowpass();
    s.ranges.noise_variance.min = -1.0;
    s.ranges.noise_variance.initial = -0.5;
    let text = serde_yaml::to_string(&s).unwrap();
    match SignalSettings::from_yaml_str(&text) {
        Err(LabError::InvalidRange { name, .. }) => assert_eq!(name, "noise_variance"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn negative_variance_file_keeps_preset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lab.yaml");
    let mut s = SignalSettings::lowpass();
    s.ranges.noise_variance.min = -1.0;
    s.save_yaml(&path).unwrap();
    let cfg = LabConfig::lowpass().with_settings_file(&path);
    assert_eq!(cfg.settings, SignalSettings::lowpass());
}

#[test]
fn oversized_window_range_rejected() {
    let mut s = SignalSettings::smoothing();
    s.ranges.window.max = 1e30;
    let text = serde_yaml::to_string(&s).unwrap();
    match SignalSettings::from_yaml_str(&text) {
        Err(LabError::InvalidRange { name, .. }) => assert_eq!(name, "window"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}
