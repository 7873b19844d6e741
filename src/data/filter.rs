//! Butterworth low-pass design, zero-phase IIR filtering and moving-average smoothing.

use std::f64::consts::PI;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// Numerator / denominator coefficients, highest power of `z^-1` last, `a[0] == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

/// Digital Butterworth low-pass of the given order.
///
/// `normal_cutoff` is the -3 dB frequency as a fraction of Nyquist and must lie
/// strictly inside `(0, 1)`.
pub fn butter_lowpass(order: usize, normal_cutoff: f64) -> Result<TransferFunction> {
    if order == 0 {
        return Err(LabError::InvalidOrder(order));
    }
    if !(normal_cutoff > 0.0 && normal_cutoff < 1.0) {
        return Err(LabError::InvalidCutoff {
            cutoff_hz: normal_cutoff,
            nyquist_hz: 1.0,
        });
    }

    // Analog prototype poles on the left half of the unit circle.
    let n = order as f64;
    let prototype = (0..order).map(|k| {
        let m = -(n - 1.0) + 2.0 * k as f64;
        -Complex::from_polar(1.0, PI * m / (2.0 * n))
    });

    // Pre-warp for the bilinear transform (sample rate normalized to 2).
    let fs2 = 4.0;
    let warped = fs2 * (PI * normal_cutoff / 2.0).tan();
    let analog: Vec<Complex<f64>> = prototype.map(|p| p * warped).collect();
    let gain = warped.powi(order as i32);

    let digital: Vec<Complex<f64>> = analog.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();
    let denom = analog
        .iter()
        .fold(Complex::new(1.0, 0.0), |acc, &p| acc * (fs2 - p));
    let k = gain * (Complex::new(1.0, 0.0) / denom).re;

    let zeros = vec![Complex::new(-1.0, 0.0); order];
    let b = poly(&zeros).into_iter().map(|c| c.re * k).collect();
    let a = poly(&digital).into_iter().map(|c| c.re).collect();
    Ok(TransferFunction { b, a })
}

/// Monic polynomial coefficients with the given roots, highest degree first.
fn poly(roots: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut coeffs = vec![Complex::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    coeffs
}

/// Pad `b` and `a` to equal length and normalize so that `a[0] == 1`.
fn normalized(b: &[f64], a: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = b.len().max(a.len());
    let a0 = a.first().copied().filter(|v| *v != 0.0).unwrap_or(1.0);
    let mut bn: Vec<f64> = b.iter().map(|v| v / a0).collect();
    let mut an: Vec<f64> = a.iter().map(|v| v / a0).collect();
    bn.resize(n, 0.0);
    an.resize(n, 0.0);
    (bn, an)
}

/// Direct-form II transposed IIR filter with optional initial state.
pub fn lfilter(b: &[f64], a: &[f64], x: &[f64], zi: Option<&[f64]>) -> Vec<f64> {
    let (b, a) = normalized(b, a);
    let order = b.len().saturating_sub(1);
    let mut z = vec![0.0; order];
    if let Some(init) = zi {
        for (zs, zi) in z.iter_mut().zip(init) {
            *zs = *zi;
        }
    }
    let mut y = Vec::with_capacity(x.len());
    for &xn in x {
        let yn = b[0] * xn + z.first().copied().unwrap_or(0.0);
        for i in 0..order {
            let next = if i + 1 < order { z[i + 1] } else { 0.0 };
            z[i] = b[i + 1] * xn + next - a[i + 1] * yn;
        }
        y.push(yn);
    }
    y
}

/// Initial state of [`lfilter`] that yields the steady state of a unit step.
pub fn lfilter_zi(b: &[f64], a: &[f64]) -> Vec<f64> {
    let (b, a) = normalized(b, a);
    let m = b.len().saturating_sub(1);
    if m == 0 {
        return Vec::new();
    }
    // (I - companion(a)^T) zi = b[1:] - a[1:] * b[0]
    let mut mat = vec![vec![0.0; m]; m];
    for (i, row) in mat.iter_mut().enumerate() {
        row[i] = 1.0;
        row[0] += a[i + 1];
        if i + 1 < m {
            row[i + 1] -= 1.0;
        }
    }
    let rhs: Vec<f64> = (0..m).map(|i| b[i + 1] - a[i + 1] * b[0]).collect();
    solve(mat, rhs)
}

/// Gaussian elimination with partial pivoting. Singular systems give zeros.
fn solve(mut mat: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Vec<f64> {
    let n = rhs.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| mat[i][col].abs().total_cmp(&mat[j][col].abs()))
            .unwrap_or(col);
        if mat[pivot][col].abs() < 1e-300 {
            return vec![0.0; n];
        }
        mat.swap(col, pivot);
        rhs.swap(col, pivot);
        for row in col + 1..n {
            let f = mat[row][col] / mat[col][col];
            if f == 0.0 {
                continue;
            }
            for k in col..n {
                mat[row][k] -= f * mat[col][k];
            }
            rhs[row] -= f * rhs[col];
        }
    }
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| mat[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / mat[row][row];
    }
    x
}

/// Zero-phase forward-backward filtering with odd-extension edge padding.
///
/// Padding length is `3 * max(len(a), len(b))`; the input must be longer.
pub fn filtfilt(b: &[f64], a: &[f64], x: &[f64]) -> Result<Vec<f64>> {
    let padlen = 3 * b.len().max(a.len());
    let n = x.len();
    if n <= padlen {
        return Err(LabError::SignalTooShort { len: n, padlen });
    }

    let first = x[0];
    let last = x[n - 1];
    let mut ext = Vec::with_capacity(n + 2 * padlen);
    ext.extend((1..=padlen).rev().map(|i| 2.0 * first - x[i]));
    ext.extend_from_slice(x);
    ext.extend((1..=padlen).map(|i| 2.0 * last - x[n - 1 - i]));

    let zi = lfilter_zi(b, a);
    let scaled = |s: f64| zi.iter().map(|z| z * s).collect::<Vec<_>>();

    let forward = lfilter(b, a, &ext, Some(&scaled(ext[0])));
    let mut reversed: Vec<f64> = forward.into_iter().rev().collect();
    let start = reversed[0];
    reversed = lfilter(b, a, &reversed, Some(&scaled(start)));
    reversed.reverse();
    Ok(reversed[padlen..padlen + n].to_vec())
}

/// Butterworth low-pass applied forward and backward (no phase shift).
pub fn lowpass_filter(data: &[f64], cutoff_hz: f64, fs: f64, order: usize) -> Result<Vec<f64>> {
    let nyquist = 0.5 * fs;
    let tf = butter_lowpass(order, cutoff_hz / nyquist).map_err(|e| match e {
        LabError::InvalidCutoff { .. } => LabError::InvalidCutoff {
            cutoff_hz,
            nyquist_hz: nyquist,
        },
        other => other,
    })?;
    filtfilt(&tf.b, &tf.a, data)
}

/// Centred box-kernel smoothing, zero-padded at the edges.
///
/// A window below 1 returns the input unchanged; even windows grow to the next
/// odd size. The output always has the input's length.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window < 1 {
        return data.to_vec();
    }
    let w = window / 2 * 2 + 1;
    if w == 1 {
        return data.to_vec();
    }
    // past the signal length every centred window covers all samples anyway
    let half = (w / 2).min(data.len()) as isize;
    let n = data.len() as isize;
    let weight = 1.0 / w as f64;
    (0..n)
        .map(|i| {
            let lo = (i - half).max(0);
            let hi = (i + half).min(n - 1);
            (lo..=hi).map(|j| data[j as usize]).sum::<f64>() * weight
        })
        .collect()
}

/// Filter applied to the noisy curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Filtered curve mirrors the input.
    None,
    Butterworth,
    MovingAverage,
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::Butterworth
    }
}

impl FilterKind {
    pub const ALL: &'static [FilterKind] = &[
        FilterKind::None,
        FilterKind::Butterworth,
        FilterKind::MovingAverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::None => "No filter",
            FilterKind::Butterworth => "Butterworth low-pass",
            FilterKind::MovingAverage => "Moving average",
        }
    }
}

/// Selected filter and the parameters of every filter kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    pub kind: FilterKind,
    pub cutoff_hz: f64,
    pub order: usize,
    pub window: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            kind: FilterKind::Butterworth,
            cutoff_hz: 3.0,
            order: 5,
            window: 5,
        }
    }
}

impl FilterSettings {
    /// Run the selected filter over `data` sampled at `fs` Hz.
    pub fn apply(&self, data: &[f64], fs: f64) -> Result<Vec<f64>> {
        match self.kind {
            FilterKind::None => Ok(data.to_vec()),
            FilterKind::Butterworth => lowpass_filter(data, self.cutoff_hz, fs, self.order),
            FilterKind::MovingAverage => Ok(moving_average(data, self.window)),
        }
    }

    pub fn describe(&self) -> String {
        match self.kind {
            FilterKind::None => "unfiltered".to_string(),
            FilterKind::Butterworth => {
                format!("LP {:.2} Hz, order {}", self.cutoff_hz, self.order)
            }
            FilterKind::MovingAverage => format!("MA window {}", self.window / 2 * 2 + 1),
        }
    }
}
