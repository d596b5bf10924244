//! Gaussian noise augmentation for visualisation.
//!
//! Noise is applied strictly after encoding and never feeds back into it.

use crate::error::{LineCodeError, Result};
use crate::signal::{Signal, Waveform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Default standard deviation of the added noise.
pub const DEFAULT_STD_DEV: f64 = 0.2;

/// Noise parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Standard deviation of the zero-mean Gaussian.
    pub std_dev: f64,
    /// Seed for reproducible noise; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            std_dev: DEFAULT_STD_DEV,
            seed: None,
        }
    }
}

/// Adds independent zero-mean Gaussian noise to every sample.
///
/// # Example
///
/// ```rust
/// use linecode::{encode, BitSequence, Scheme};
/// use linecode::noise::{NoiseAugmenter, NoiseConfig};
///
/// let bits: BitSequence = "1010".parse().unwrap();
/// let signal = encode(&bits, Scheme::NrzL);
///
/// let config = NoiseConfig { std_dev: 0.2, seed: Some(7) };
/// let a = NoiseAugmenter::new(config).unwrap().apply(&signal);
/// let b = NoiseAugmenter::new(config).unwrap().apply(&signal);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseAugmenter {
    std_dev: f64,
    normal: Normal<f64>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl NoiseAugmenter {
    /// Builds an augmenter, rejecting a negative or non-finite deviation.
    pub fn new(config: NoiseConfig) -> Result<Self> {
        if !config.std_dev.is_finite() || config.std_dev < 0.0 {
            return Err(LineCodeError::InvalidNoise(config.std_dev));
        }
        let normal =
            Normal::new(0.0, config.std_dev).map_err(|_| LineCodeError::InvalidNoise(config.std_dev))?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        debug!(std_dev = config.std_dev, seed, "noise augmenter ready");

        Ok(Self {
            std_dev: config.std_dev,
            normal,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// The seed in use, so unseeded runs can be reproduced.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a noisy copy of `signal`.
    pub fn apply(&mut self, signal: &Signal) -> Waveform {
        let samples = signal
            .levels()
            .iter()
            .map(|&level| f64::from(level) + self.normal.sample(&mut self.rng))
            .collect();

        Waveform {
            scheme: signal.scheme(),
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BitSequence, Scheme, encode};

    fn signal() -> Signal {
        let bits: BitSequence = "11001010".parse().unwrap();
        encode(&bits, Scheme::Manchester)
    }

    #[test]
    fn test_default_std_dev() {
        assert_eq!(NoiseConfig::default().std_dev, 0.2);
        assert!(NoiseConfig::default().seed.is_none());
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let config = NoiseConfig {
            std_dev: 0.5,
            seed: Some(42),
        };
        let a = NoiseAugmenter::new(config).unwrap().apply(&signal());
        let b = NoiseAugmenter::new(config).unwrap().apply(&signal());
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_preserves_length_and_scheme() {
        let clean = signal();
        let noisy = NoiseAugmenter::new(NoiseConfig::default())
            .unwrap()
            .apply(&clean);
        assert_eq!(noisy.len(), clean.len());
        assert_eq!(noisy.scheme(), Scheme::Manchester);
    }

    #[test]
    fn test_zero_std_dev_is_identity() {
        let clean = signal();
        let noisy = NoiseAugmenter::new(NoiseConfig {
            std_dev: 0.0,
            seed: Some(1),
        })
        .unwrap()
        .apply(&clean);
        assert_eq!(noisy, clean.to_waveform());
    }

    #[test]
    fn test_noise_actually_perturbs() {
        let clean = signal();
        let noisy = NoiseAugmenter::new(NoiseConfig {
            std_dev: 0.2,
            seed: Some(3),
        })
        .unwrap()
        .apply(&clean);
        assert_ne!(noisy, clean.to_waveform());
    }

    #[test]
    fn test_unseeded_noise_reports_reusable_seed() {
        let bits: BitSequence = "1011".parse().unwrap();
        let signal = encode(&bits, Scheme::Unipolar);

        let mut unseeded = NoiseAugmenter::new(NoiseConfig {
            std_dev: 3.0,
            seed: None,
        })
        .unwrap();
        let first = unseeded.apply(&signal);

        let replayed = NoiseAugmenter::new(NoiseConfig {
            std_dev: 3.0,
            seed: Some(unseeded.seed()),
        })
        .unwrap()
        .apply(&signal);
        assert_eq!(first, replayed);
    }

    #[test]
    fn test_rejects_invalid_std_dev() {
        for std_dev in [-0.1, f64::NAN, f64::INFINITY] {
            let result = NoiseAugmenter::new(NoiseConfig {
                std_dev,
                seed: None,
            });
            assert!(matches!(result, Err(LineCodeError::InvalidNoise(_))));
        }
    }
}
