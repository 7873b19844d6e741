//! Configuration types for the harmonic lab.
//!
//! [`SignalSettings`] holds everything that shapes the maths (time axis,
//! slider ranges, filter defaults, reset policy) and can be loaded from a YAML
//! or JSON file. [`LabConfig`] wraps it together with the window chrome and
//! appearance, which only exist in code.

use std::f64::consts::TAU;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::filter::{FilterKind, FilterSettings};
use crate::data::noise::NoiseParams;
use crate::data::signal::SignalParams;
use crate::data::trace_look::CurveLooks;
use crate::error::{LabError, Result};

/// Environment variable naming a settings file that overrides the preset.
pub const CONFIG_ENV_VAR: &str = "HARMONIC_LAB_CONFIG";

/// Largest moving-average window a settings file may offer.
pub const MAX_WINDOW: f64 = 10_001.0;

// ─────────────────────────────────────────────────────────────────────────────
// Slider ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Bounds, initial value and optional step of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub initial: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, initial: f64) -> Self {
        Self {
            min,
            max,
            initial,
            step: None,
        }
    }

    pub const fn with_step(self, step: f64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_nan() {
            self.initial
        } else {
            v.clamp(self.min, self.max)
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        self.validate_within(name, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Like `validate`, with `min` and `max` also confined to `[lower, upper]`.
    fn validate_within(&self, name: &str, lower: f64, upper: f64) -> Result<()> {
        let ok = [self.min, self.max, self.initial].iter().all(|v| v.is_finite())
            && self.min <= self.initial
            && self.initial <= self.max
            && self.min >= lower
            && self.max <= upper;
        if ok {
            Ok(())
        } else {
            Err(LabError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                initial: self.initial,
                max: self.max,
            })
        }
    }
}

/// Time axis: `samples` evenly spaced points over `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisSettings {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

/// All slider ranges of the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRanges {
    pub amplitude: ParamRange,
    pub frequency: ParamRange,
    pub phase: ParamRange,
    pub noise_mean: ParamRange,
    pub noise_variance: ParamRange,
    pub cutoff_hz: ParamRange,
    pub window: ParamRange,
}

impl ParamRanges {
    fn validate(&self) -> Result<()> {
        self.amplitude.validate("amplitude")?;
        self.frequency.validate("frequency")?;
        self.phase.validate("phase")?;
        self.noise_mean.validate("noise_mean")?;
        self.noise_variance
            .validate_within("noise_variance", 0.0, f64::INFINITY)?;
        self.cutoff_hz.validate("cutoff_hz")?;
        self.window.validate_within("window", 0.0, MAX_WINDOW)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SignalSettings
// ─────────────────────────────────────────────────────────────────────────────

/// Everything that shapes the computed curves. Serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSettings {
    pub time: TimeAxisSettings,
    pub ranges: ParamRanges,
    pub show_noise: bool,
    pub filter: FilterKind,
    /// Filter kinds offered in the controls. The first one is used if `filter` is missing.
    pub available_filters: Vec<FilterKind>,
    pub filter_order: usize,
    /// Reset always draws fresh noise (otherwise only if the noise sliders moved).
    pub reset_regenerates_noise: bool,
    /// Reset also restores the show-noise checkbox.
    pub reset_show_noise: bool,
    /// Fixed RNG seed for reproducible noise.
    #[serde(default)]
    pub noise_seed: Option<u64>,
}

impl Default for SignalSettings {
    fn default() -> Self {
        Self::lowpass()
    }
}

impl SignalSettings {
    /// One overlay plot, Butterworth low-pass, explicit noise regeneration.
    pub fn lowpass() -> Self {
        Self {
            time: TimeAxisSettings {
                start: 0.0,
                end: 10.0,
                samples: 1000,
            },
            ranges: ParamRanges {
                amplitude: ParamRange::new(0.1, 5.0, 1.0),
                frequency: ParamRange::new(0.1, 5.0, 1.0),
                phase: ParamRange::new(0.0, TAU, 0.0),
                noise_mean: ParamRange::new(-1.0, 1.0, 0.0),
                noise_variance: ParamRange::new(0.01, 1.0, 0.1),
                cutoff_hz: ParamRange::new(0.1, 10.0, 3.0),
                window: ParamRange::new(1.0, 51.0, 5.0).with_step(2.0),
            },
            show_noise: true,
            filter: FilterKind::Butterworth,
            available_filters: vec![FilterKind::Butterworth],
            filter_order: 5,
            reset_regenerates_noise: false,
            reset_show_noise: false,
            noise_seed: None,
        }
    }

    /// Raw and smoothed plots, optional moving average.
    pub fn smoothing() -> Self {
        Self {
            time: TimeAxisSettings {
                start: 0.0,
                end: 10.0,
                samples: 500,
            },
            ranges: ParamRanges {
                amplitude: ParamRange::new(0.1, 5.0, 1.0).with_step(0.1),
                frequency: ParamRange::new(0.1, 5.0, 1.0).with_step(0.1),
                phase: ParamRange::new(0.0, TAU, 0.0).with_step(0.1),
                noise_mean: ParamRange::new(-1.0, 1.0, 0.0).with_step(0.1),
                noise_variance: ParamRange::new(0.0, 1.0, 0.1).with_step(0.05),
                cutoff_hz: ParamRange::new(0.1, 10.0, 3.0),
                window: ParamRange::new(1.0, 51.0, 5.0).with_step(2.0),
            },
            show_noise: true,
            filter: FilterKind::None,
            available_filters: vec![FilterKind::None, FilterKind::MovingAverage],
            filter_order: 5,
            reset_regenerates_noise: true,
            reset_show_noise: true,
            noise_seed: None,
        }
    }

    /// Check the ranges, the time axis and the filter selection.
    pub fn validate(&self) -> Result<()> {
        if self.time.samples < 2 || !(self.time.end > self.time.start) {
            return Err(LabError::InvalidTimeAxis);
        }
        if self.filter_order == 0 {
            return Err(LabError::InvalidOrder(0));
        }
        self.ranges.validate()
    }

    /// Initial signal parameters.
    pub fn initial_signal(&self) -> SignalParams {
        SignalParams {
            amplitude: self.ranges.amplitude.initial,
            frequency: self.ranges.frequency.initial,
            phase: self.ranges.phase.initial,
            show_noise: self.show_noise,
        }
    }

    pub fn initial_noise(&self) -> NoiseParams {
        NoiseParams {
            mean: self.ranges.noise_mean.initial,
            variance: self.ranges.noise_variance.initial,
        }
    }

    pub fn initial_filter(&self) -> FilterSettings {
        let kind = if self.available_filters.is_empty()
            || self.available_filters.contains(&self.filter)
        {
            self.filter
        } else {
            self.available_filters[0]
        };
        FilterSettings {
            kind,
            cutoff_hz: self.ranges.cutoff_hz.initial,
            order: self.filter_order,
            window: self.ranges.window.initial.round().max(0.0) as usize,
        }
    }

    /// Parse YAML settings.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse JSON settings.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file; `.json` is parsed as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Save as YAML.
    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_yaml::to_string(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout / features
// ─────────────────────────────────────────────────────────────────────────────

/// How the curves are arranged in the central area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLayout {
    /// All curves in one plot.
    Overlay,
    /// Noisy curve on top, filtered curve below.
    Split,
}

/// Toggle individual UI features on or off.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Enable the spectrum panel.
    pub spectrum: bool,
    /// Enable the export menu.
    pub export: bool,
    /// Show the plot legend.
    pub legend: bool,
    /// Show the plot grid.
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            spectrum: true,
            export: true,
            legend: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LabConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the lab window.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `settings`       | Signal maths, slider ranges, reset policy |
/// | `layout`         | Overlay or split plots |
/// | `y_range`        | Fixed vertical extent of every time plot |
/// | `looks`          | Curve colours and styles |
/// | `color_scheme`   | Visual theme |
/// | `features`       | Toggle optional UI parts |
#[derive(Clone)]
pub struct LabConfig {
    pub settings: SignalSettings,

    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the plots.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    pub layout: PlotLayout,
    pub y_range: (f64, f64),
    pub looks: CurveLooks,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::lowpass()
    }
}

impl LabConfig {
    pub fn lowpass() -> Self {
        Self {
            settings: SignalSettings::lowpass(),
            title: "Harmonic Lab: low-pass".to_string(),
            headline: Some("Harmonic, noise and filtered signal".to_string()),
            native_options: None,
            layout: PlotLayout::Overlay,
            y_range: (-5.0, 5.0),
            looks: CurveLooks::default(),
            color_scheme: ColorScheme::Lab,
            features: FeatureFlags::default(),
        }
    }

    pub fn smoothing() -> Self {
        Self {
            settings: SignalSettings::smoothing(),
            title: "Harmonic with noise".to_string(),
            headline: None,
            native_options: None,
            layout: PlotLayout::Split,
            y_range: (-6.0, 6.0),
            looks: CurveLooks::split(),
            color_scheme: ColorScheme::Light,
            features: FeatureFlags::default(),
        }
    }

    /// Replace the preset's settings with the file named by [`CONFIG_ENV_VAR`], if any.
    ///
    /// Load failures are logged and leave the preset untouched.
    pub fn from_env_or(preset: LabConfig) -> LabConfig {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => preset.with_settings_file(path),
            None => preset,
        }
    }

    /// Replace the settings with those loaded from `path`, keeping them on failure.
    pub fn with_settings_file(mut self, path: impl AsRef<Path>) -> LabConfig {
        let path = path.as_ref();
        match SignalSettings::load(path) {
            Ok(settings) => {
                log::info!("loaded signal settings from {}", path.display());
                self.settings = settings;
            }
            Err(e) => log::error!("ignoring settings file {}: {e}", path.display()),
        }
        self
    }
}
