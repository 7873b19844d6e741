use harmonic_lab::data::export::*;
use harmonic_lab::{LabSession, SignalSettings};

fn session() -> LabSession {
    let mut settings = SignalSettings::smoothing();
    settings.noise_seed = Some(1);
    LabSession::new(settings).unwrap()
}

#[test]
fn writes_expected_csv() {
    let s = session();
    let mut buf = Vec::new();
    write_curves_csv(&mut buf, &s).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.trim().split('\n').collect();
    assert_eq!(lines[0], "t,harmonic,noisy,filtered");
    assert_eq!(lines.len(), 501);
    assert!(lines[1].starts_with("0.000000000,"));
    assert_eq!(lines[1].split(',').count(), 4);
}

#[test]
fn saves_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.csv");
    save_curves_csv(&path, &session()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 501);
}

#[test]
fn saves_screenshot_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");
    let image = egui::ColorImage::from_rgba_unmultiplied([4, 3], &[200u8; 48]);
    save_color_image_png(&path, &image).unwrap();
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (4, 3));
}

#[test]
fn timestamped_names_keep_extension() {
    let name = timestamped_name("curves", "csv");
    assert!(name.starts_with("curves_"));
    assert!(name.ends_with(".csv"));
}
