use harmonic_lab::data::filter::moving_average;
use harmonic_lab::data::signal::harmonic;
use harmonic_lab::{FilterKind, LabError, LabSession, ParamRange, SignalSettings};

fn seeded(mut settings: SignalSettings) -> LabSession {
    settings.noise_seed = Some(42);
    LabSession::new(settings).unwrap()
}

#[test]
fn lowpass_session_starts_with_all_curves() {
    let s = seeded(SignalSettings::lowpass());
    let c = s.curves();
    assert_eq!(s.time().len(), 1000);
    assert_eq!(c.harmonic.len(), 1000);
    assert_eq!(c.noisy.len(), 1000);
    assert_eq!(c.filtered.len(), 1000);
    assert!(s.last_error().is_none());
    assert!(!s.window_enabled());
}

#[test]
fn amplitude_change_keeps_noise_realization() {
    let mut s = seeded(SignalSettings::lowpass());
    let noise = s.noise_samples().to_vec();
    s.set_amplitude(2.0);
    assert_eq!(s.noise_samples(), noise.as_slice());
    assert_eq!(s.curves().harmonic, harmonic(s.time(), 2.0, 1.0, 0.0));
    for ((n, h), e) in s.curves().noisy.iter().zip(&s.curves().harmonic).zip(&noise) {
        assert!((n - h - e).abs() < 1e-12);
    }
}

#[test]
fn hiding_noise_gives_clean_noisy_curve() {
    let mut s = seeded(SignalSettings::lowpass());
    s.set_show_noise(false);
    assert_eq!(s.curves().noisy, s.curves().harmonic);
}

#[test]
fn noise_slider_redraws_noise() {
    let mut s = seeded(SignalSettings::lowpass());
    let before = s.noise_samples().to_vec();
    s.set_noise_variance(0.5);
    assert_ne!(s.noise_samples(), before.as_slice());
    assert_eq!(s.noise_params().variance, 0.5);
}

#[test]
fn regenerate_noise_always_redraws() {
    let mut s = seeded(SignalSettings::lowpass());
    let before = s.noise_samples().to_vec();
    s.regenerate_noise();
    assert_ne!(s.noise_samples(), before.as_slice());
}

#[test]
fn cutoff_only_refilters() {
    let mut s = seeded(SignalSettings::lowpass());
    let noisy = s.curves().noisy.clone();
    let filtered = s.curves().filtered.clone();
    s.set_cutoff(8.0);
    assert_eq!(s.curves().noisy, noisy);
    assert_ne!(s.curves().filtered, filtered);
    assert_eq!(s.filter().cutoff_hz, 8.0);
}

#[test]
fn setters_clamp_to_ranges() {
    let mut s = seeded(SignalSettings::lowpass());
    s.set_cutoff(100.0);
    assert_eq!(s.filter().cutoff_hz, 10.0);
    s.set_amplitude(-3.0);
    assert_eq!(s.signal().amplitude, 0.1);
}

#[test]
fn lowpass_reset_keeps_noise_unless_noise_sliders_moved() {
    let mut s = seeded(SignalSettings::lowpass());
    let initial_noise = s.noise_samples().to_vec();
    s.set_amplitude(3.0);
    s.set_show_noise(false);
    s.reset();
    assert_eq!(s.noise_samples(), initial_noise.as_slice());
    assert_eq!(s.signal().amplitude, 1.0);
    // show-noise is not part of the lowpass reset
    assert!(!s.signal().show_noise);

    s.set_noise_mean(0.5);
    let moved = s.noise_samples().to_vec();
    s.reset();
    assert_ne!(s.noise_samples(), moved.as_slice());
    assert_eq!(s.noise_params().mean, 0.0);
}

#[test]
fn smoothing_starts_unfiltered() {
    let s = seeded(SignalSettings::smoothing());
    assert_eq!(s.time().len(), 500);
    assert_eq!(s.filter().kind, FilterKind::None);
    assert_eq!(s.curves().filtered, s.curves().noisy);
    assert!(!s.window_enabled());
}

#[test]
fn smoothing_moving_average_enables_window() {
    let mut s = seeded(SignalSettings::smoothing());
    s.set_filter_kind(FilterKind::MovingAverage);
    assert!(s.window_enabled());
    assert_eq!(s.curves().filtered, moving_average(&s.curves().noisy, 5));

    s.set_window(11);
    assert_eq!(s.curves().filtered, moving_average(&s.curves().noisy, 11));
}

#[test]
fn smoothing_ignores_unavailable_filter() {
    let mut s = seeded(SignalSettings::smoothing());
    s.set_filter_kind(FilterKind::Butterworth);
    assert_eq!(s.filter().kind, FilterKind::None);
}

#[test]
fn smoothing_reset_restores_everything_and_redraws_noise() {
    let mut s = seeded(SignalSettings::smoothing());
    let initial_noise = s.noise_samples().to_vec();
    s.set_filter_kind(FilterKind::MovingAverage);
    s.set_window(21);
    s.set_show_noise(false);
    s.reset();
    assert_eq!(s.filter().kind, FilterKind::None);
    assert_eq!(s.filter().window, 5);
    assert!(s.signal().show_noise);
    assert_ne!(s.noise_samples(), initial_noise.as_slice());
}

#[test]
fn filter_failure_keeps_previous_curve() {
    let mut settings = SignalSettings::lowpass();
    settings.ranges.cutoff_hz = ParamRange::new(0.1, 80.0, 3.0);
    let mut s = seeded(settings);
    let filtered = s.curves().filtered.clone();
    s.set_cutoff(60.0);
    assert!(matches!(s.last_error(), Some(LabError::InvalidCutoff { .. })));
    assert_eq!(s.curves().filtered, filtered);

    s.set_cutoff(4.0);
    assert!(s.last_error().is_none());
}

#[test]
fn too_few_samples_reported_not_fatal() {
    let mut settings = SignalSettings::lowpass();
    // 9 Hz sampling keeps the 3 Hz cutoff below Nyquist
    settings.time.end = 1.0;
    settings.time.samples = 10;
    let s = seeded(settings);
    assert!(matches!(
        s.last_error(),
        Some(LabError::SignalTooShort { len: 10, .. })
    ));
    assert!(s.curves().filtered.is_empty());
    assert_eq!(s.curves().noisy.len(), 10);
}

#[test]
fn revision_advances_on_change() {
    let mut s = seeded(SignalSettings::lowpass());
    let r = s.revision();
    s.set_phase(1.0);
    assert!(s.revision() > r);
}

#[test]
fn huge_window_does_not_panic() {
    let mut settings = SignalSettings::smoothing();
    settings.ranges.window.max = 10_001.0;
    let mut s = seeded(settings);
    s.set_filter_kind(FilterKind::MovingAverage);
    s.set_window(usize::MAX);
    assert_eq!(s.filter().window, 10_001);
    assert_eq!(s.curves().filtered.len(), 500);
}
