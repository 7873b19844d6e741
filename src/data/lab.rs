//! Lab session: current parameter values, the cached noise and the computed curves.
//!
//! Every setter recomputes exactly the curves its control affects:
//!
//! | Control                       | Harmonic | Noise                    | Noisy | Filtered |
//! |-------------------------------|----------|--------------------------|-------|----------|
//! | amplitude / frequency / phase | ✔        |                          | ✔     | ✔        |
//! | show noise                    |          |                          | ✔     | ✔        |
//! | noise mean / variance         |          | redrawn if changed       | ✔     | ✔        |
//! | filter kind / cutoff / window |          |                          |       | ✔        |
//! | regenerate noise              |          | redrawn                  | ✔     | ✔        |
//! | reset                         | ✔        | per reset policy         | ✔     | ✔        |

use crate::config::SignalSettings;
use crate::data::filter::{FilterKind, FilterSettings};
use crate::data::noise::{NoiseCache, NoiseParams};
use crate::data::signal::{harmonic, harmonic_with_noise, sampling_frequency, time_axis, SignalParams};
use crate::error::{LabError, Result};

/// The three curves sharing the session's time axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabCurves {
    pub harmonic: Vec<f64>,
    pub noisy: Vec<f64>,
    pub filtered: Vec<f64>,
}

pub struct LabSession {
    settings: SignalSettings,
    t: Vec<f64>,
    fs: f64,
    signal: SignalParams,
    noise_params: NoiseParams,
    noise: NoiseCache,
    filter: FilterSettings,
    curves: LabCurves,
    last_error: Option<LabError>,
    revision: u64,
}

impl LabSession {
    /// Build the time axis, draw the initial noise and compute every curve.
    pub fn new(settings: SignalSettings) -> Result<Self> {
        settings.validate()?;
        let t = time_axis(settings.time.start, settings.time.end, settings.time.samples);
        let fs = sampling_frequency(&t).ok_or(LabError::InvalidTimeAxis)?;
        let noise_params = settings.initial_noise();
        let noise = NoiseCache::new(t.len(), noise_params, settings.noise_seed)?;
        let mut session = Self {
            signal: settings.initial_signal(),
            filter: settings.initial_filter(),
            settings,
            t,
            fs,
            noise_params,
            noise,
            curves: LabCurves::default(),
            last_error: None,
            revision: 0,
        };
        session.recompute_all();
        log::debug!(
            "lab session ready: {} samples at {:.3} Hz, filter {}",
            session.t.len(),
            session.fs,
            session.filter.describe()
        );
        Ok(session)
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn settings(&self) -> &SignalSettings {
        &self.settings
    }

    pub fn time(&self) -> &[f64] {
        &self.t
    }

    /// Sampling frequency of the time axis in Hz.
    pub fn fs(&self) -> f64 {
        self.fs
    }

    pub fn signal(&self) -> &SignalParams {
        &self.signal
    }

    /// Noise parameters as currently set on the sliders.
    pub fn noise_params(&self) -> NoiseParams {
        self.noise_params
    }

    pub fn noise_samples(&self) -> &[f64] {
        self.noise.samples()
    }

    pub fn filter(&self) -> &FilterSettings {
        &self.filter
    }

    pub fn curves(&self) -> &LabCurves {
        &self.curves
    }

    pub fn last_error(&self) -> Option<&LabError> {
        self.last_error.as_ref()
    }

    /// Bumped on every recompute of any curve.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The moving-average window control only applies to the moving average.
    pub fn window_enabled(&self) -> bool {
        self.filter.kind == FilterKind::MovingAverage
    }

    pub fn available_filters(&self) -> &[FilterKind] {
        &self.settings.available_filters
    }

    // ── Signal controls ──────────────────────────────────────────────────────

    pub fn set_amplitude(&mut self, v: f64) {
        self.signal.amplitude = self.settings.ranges.amplitude.clamp(v);
        self.recompute_all();
    }

    pub fn set_frequency(&mut self, v: f64) {
        self.signal.frequency = self.settings.ranges.frequency.clamp(v);
        self.recompute_all();
    }

    pub fn set_phase(&mut self, v: f64) {
        self.signal.phase = self.settings.ranges.phase.clamp(v);
        self.recompute_all();
    }

    pub fn set_show_noise(&mut self, show: bool) {
        self.signal.show_noise = show;
        self.recompute_noisy();
        self.refilter();
    }

    // ── Noise controls ───────────────────────────────────────────────────────

    pub fn set_noise_mean(&mut self, v: f64) {
        self.noise_params.mean = self.settings.ranges.noise_mean.clamp(v);
        self.refresh_noise();
    }

    pub fn set_noise_variance(&mut self, v: f64) {
        self.noise_params.variance = self.settings.ranges.noise_variance.clamp(v);
        self.refresh_noise();
    }

    /// Draw a fresh noise realization with the current noise parameters.
    pub fn regenerate_noise(&mut self) {
        match self.noise.regenerate(self.noise_params) {
            Ok(()) => {
                self.recompute_noisy();
                self.refilter();
            }
            Err(e) => self.record_error(e),
        }
    }

    fn refresh_noise(&mut self) {
        match self.noise.refresh(self.noise_params) {
            Ok(_) => {
                self.recompute_noisy();
                self.refilter();
            }
            Err(e) => self.record_error(e),
        }
    }

    // ── Filter controls ──────────────────────────────────────────────────────

    /// Select a filter kind. Kinds not offered by the settings are ignored.
    pub fn set_filter_kind(&mut self, kind: FilterKind) {
        let offered = self.settings.available_filters.is_empty()
            || self.settings.available_filters.contains(&kind);
        if !offered {
            log::warn!("filter {} is not available in this lab", kind.label());
            return;
        }
        self.filter.kind = kind;
        self.refilter();
    }

    pub fn set_cutoff(&mut self, hz: f64) {
        self.filter.cutoff_hz = self.settings.ranges.cutoff_hz.clamp(hz);
        self.refilter();
    }

    pub fn set_window(&mut self, window: usize) {
        let w = self.settings.ranges.window.clamp(window as f64);
        self.filter.window = w.round() as usize;
        self.refilter();
    }

    pub fn set_order(&mut self, order: usize) {
        self.filter.order = order.max(1);
        self.refilter();
    }

    // ── Reset ────────────────────────────────────────────────────────────────

    /// Return every control to its initial value.
    ///
    /// Noise is redrawn always when `reset_regenerates_noise` is set, otherwise
    /// only if the noise sliders had moved away from their initial values.
    pub fn reset(&mut self) {
        let show_noise = if self.settings.reset_show_noise {
            self.settings.show_noise
        } else {
            self.signal.show_noise
        };
        self.signal = SignalParams {
            show_noise,
            ..self.settings.initial_signal()
        };
        self.noise_params = self.settings.initial_noise();
        self.filter = self.settings.initial_filter();

        let noise = if self.settings.reset_regenerates_noise {
            self.noise.regenerate(self.noise_params)
        } else {
            self.noise.refresh(self.noise_params).map(|_| ())
        };
        log::info!("lab parameters reset");
        self.recompute_all();
        if let Err(e) = noise {
            self.record_error(e);
        }
    }

    // ── Recompute ────────────────────────────────────────────────────────────

    fn recompute_all(&mut self) {
        self.curves.harmonic = harmonic(
            &self.t,
            self.signal.amplitude,
            self.signal.frequency,
            self.signal.phase,
        );
        self.recompute_noisy();
        self.refilter();
    }

    fn recompute_noisy(&mut self) {
        self.curves.noisy = harmonic_with_noise(&self.t, &self.signal, self.noise.samples());
        self.revision += 1;
    }

    /// Filter the current noisy curve. On failure the previous filtered curve stays.
    fn refilter(&mut self) {
        match self.filter.apply(&self.curves.noisy, self.fs) {
            Ok(filtered) => {
                self.curves.filtered = filtered;
                self.last_error = None;
                log::debug!("refiltered ({})", self.filter.describe());
            }
            Err(e) => self.record_error(e),
        }
        self.revision += 1;
    }

    fn record_error(&mut self, e: LabError) {
        log::warn!("{e}");
        self.last_error = Some(e);
    }
}
