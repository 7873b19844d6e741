use harmonic_lab::data::signal::*;
use std::f64::consts::PI;

#[test]
fn unit_harmonic_reproduces_sine() {
    let t = time_axis(0.0, 10.0, 1000);
    let y = harmonic(&t, 1.0, 1.0, 0.0);
    for (ti, yi) in t.iter().zip(&y) {
        assert!((yi - (2.0 * PI * ti).sin()).abs() < 1e-12);
    }
}

#[test]
fn amplitude_and_phase_are_applied() {
    let t = time_axis(0.0, 1.0, 101);
    let y = harmonic(&t, 2.5, 3.0, PI / 2.0);
    // sin(x + pi/2) = cos(x)
    for (ti, yi) in t.iter().zip(&y) {
        assert!((yi - 2.5 * (6.0 * PI * ti).cos()).abs() < 1e-12);
    }
}

#[test]
fn harmonic_length_follows_axis() {
    let t = time_axis(0.0, 10.0, 500);
    assert_eq!(harmonic(&t, 1.0, 1.0, 0.0).len(), 500);
    assert!(harmonic(&[], 1.0, 1.0, 0.0).is_empty());
}

#[test]
fn smoothing_axis_step() {
    let t = time_axis(0.0, 10.0, 500);
    let fs = sampling_frequency(&t).unwrap();
    assert!((fs - 49.9).abs() < 1e-9, "fs = {fs}");
}
