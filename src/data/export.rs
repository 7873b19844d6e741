use std::io::Write;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::data::lab::LabSession;
use crate::error::Result;

/// Write the current curves as CSV: `t,harmonic,noisy,filtered`, one row per sample.
pub fn write_curves_csv<W: Write>(mut w: W, session: &LabSession) -> Result<()> {
	let curves = session.curves();
	writeln!(w, "t,harmonic,noisy,filtered")?;
	for (i, t) in session.time().iter().enumerate() {
		let get = |v: &[f64]| v.get(i).copied().unwrap_or(f64::NAN);
		writeln!(
			w,
			"{:.9},{},{},{}",
			t,
			get(&curves.harmonic),
			get(&curves.noisy),
			get(&curves.filtered)
		)?;
	}
	w.flush()?;
	Ok(())
}

pub fn save_curves_csv<P: AsRef<Path>>(path: P, session: &LabSession) -> Result<()> {
	let f = std::fs::File::create(path)?;
	write_curves_csv(std::io::BufWriter::new(f), session)
}

/// Convert an egui viewport screenshot to PNG.
pub fn save_color_image_png<P: AsRef<Path>>(path: P, image: &egui::ColorImage) -> Result<()> {
	let [w, h] = image.size;
	let mut out = RgbaImage::new(w as u32, h as u32);
	for y in 0..h {
		for x in 0..w {
			let p = image.pixels[y * w + x];
			out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
		}
	}
	out.save(path)?;
	Ok(())
}

/// Default export file name stamped with the local time, e.g. `curves_20240115_120000.csv`.
pub fn timestamped_name(stem: &str, ext: &str) -> String {
	format!("{stem}_{}.{ext}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
