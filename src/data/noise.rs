//! Additive Gaussian noise and the cached noise realization shared by the curves.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::{LabError, Result};

/// Mean and variance of the additive noise.
///
/// The lab calls the variance "covariance"; sampling uses `sqrt(variance)`
/// as the standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    pub mean: f64,
    pub variance: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 0.1,
        }
    }
}

impl NoiseParams {
    fn distribution(&self) -> Result<Normal<f64>> {
        let invalid = LabError::InvalidNoise {
            mean: self.mean,
            variance: self.variance,
        };
        if !self.mean.is_finite() || !self.variance.is_finite() || self.variance < 0.0 {
            return Err(invalid);
        }
        Normal::new(self.mean, self.variance.sqrt()).map_err(|_| invalid)
    }
}

/// Draw `n` samples of `Normal(mean, sqrt(variance))`.
pub fn create_noise<R: rand::Rng + ?Sized>(
    n: usize,
    params: &NoiseParams,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let normal = params.distribution()?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

/// One noise realization plus the parameters it was drawn with.
pub struct NoiseCache {
    len: usize,
    params: NoiseParams,
    samples: Vec<f64>,
    rng: StdRng,
}

impl NoiseCache {
    /// Draw the first realization. A `seed` makes every later realization reproducible.
    pub fn new(len: usize, params: NoiseParams, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let samples = create_noise(len, &params, &mut rng)?;
        Ok(Self {
            len,
            params,
            samples,
            rng,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn params(&self) -> NoiseParams {
        self.params
    }

    /// Always draw a fresh realization. On error the cached one is kept.
    pub fn regenerate(&mut self, params: NoiseParams) -> Result<()> {
        self.samples = create_noise(self.len, &params, &mut self.rng)?;
        self.params = params;
        log::info!(
            "regenerated {} noise samples (mean {:.3}, variance {:.3})",
            self.len,
            params.mean,
            params.variance
        );
        Ok(())
    }

    /// Draw a fresh realization only if `params` differ from the cached ones.
    pub fn refresh(&mut self, params: NoiseParams) -> Result<bool> {
        if params == self.params {
            return Ok(false);
        }
        self.regenerate(params)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_variance_is_constant_mean() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = NoiseParams {
            mean: 0.3,
            variance: 0.0,
        };
        let n = create_noise(32, &params, &mut rng).unwrap();
        assert!(n.iter().all(|&v| (v - 0.3).abs() < 1e-12));
    }

    #[test]
    fn negative_variance_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = NoiseParams {
            mean: 0.0,
            variance: -0.1,
        };
        assert!(matches!(
            create_noise(4, &params, &mut rng),
            Err(LabError::InvalidNoise { .. })
        ));
    }

    #[test]
    fn sample_statistics_follow_params() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = NoiseParams {
            mean: 0.5,
            variance: 0.25,
        };
        let n = create_noise(20_000, &params, &mut rng).unwrap();
        let mean = n.iter().sum::<f64>() / n.len() as f64;
        let var = n.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n.len() as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean = {mean}");
        assert!((var - 0.25).abs() < 0.02, "var = {var}");
    }

    #[test]
    fn refresh_only_on_change() {
        let mut cache = NoiseCache::new(64, NoiseParams::default(), Some(3)).unwrap();
        let before = cache.samples().to_vec();
        assert!(!cache.refresh(NoiseParams::default()).unwrap());
        assert_eq!(cache.samples(), before.as_slice());

        let changed = NoiseParams {
            mean: 0.5,
            ..Default::default()
        };
        assert!(cache.refresh(changed).unwrap());
        assert_ne!(cache.samples(), before.as_slice());
        assert_eq!(cache.params(), changed);
    }

    #[test]
    fn failed_regenerate_keeps_cache() {
        let mut cache = NoiseCache::new(8, NoiseParams::default(), Some(3)).unwrap();
        let before = cache.samples().to_vec();
        let bad = NoiseParams {
            mean: 0.0,
            variance: f64::NAN,
        };
        assert!(cache.regenerate(bad).is_err());
        assert_eq!(cache.samples(), before.as_slice());
        assert_eq!(cache.params(), NoiseParams::default());
    }
}
