//! Encoded output types.

use crate::bits::BitSequence;
use crate::scheme::Scheme;
use std::ops::Range;

/// A discrete signal level as emitted by the encoder.
pub type SignalLevel = i8;

/// The level sequence produced by one encode call.
///
/// Carries the bits and scheme it was produced from so downstream consumers
/// (renderers, exporters) can place bit labels without re-deriving the
/// sample layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub(crate) scheme: Scheme,
    pub(crate) bits: BitSequence,
    pub(crate) levels: Vec<SignalLevel>,
}

impl Signal {
    /// The scheme that produced this signal.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The encoded bits.
    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    /// Levels in sample order.
    pub fn levels(&self) -> &[SignalLevel] {
        &self.levels
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when no samples were produced.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sample indices `0..N`.
    pub fn timebase(&self) -> Range<usize> {
        0..self.levels.len()
    }

    /// Sample index at which each bit starts.
    pub fn bit_positions(&self) -> impl Iterator<Item = usize> + '_ {
        let step = self.scheme.samples_per_bit();
        (0..self.bits.len()).map(move |i| i * step)
    }

    /// Lossless conversion to floating-point samples.
    pub fn to_waveform(&self) -> Waveform {
        Waveform {
            scheme: self.scheme,
            samples: self.levels.iter().map(|&l| f64::from(l)).collect(),
        }
    }

    /// Consumes the signal, returning the raw levels.
    pub fn into_levels(self) -> Vec<SignalLevel> {
        self.levels
    }
}

/// Floating-point samples ready for rendering or export.
///
/// Produced from a [`Signal`] either directly or through the noise
/// augmenter, so samples are not restricted to the scheme's level set.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub(crate) scheme: Scheme,
    pub(crate) samples: Vec<f64>,
}

impl Waveform {
    /// The scheme the samples were encoded with.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Sample values, one per time step.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(time, level)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples.iter().copied().enumerate()
    }
}

impl From<&Signal> for Waveform {
    fn from(signal: &Signal) -> Self {
        signal.to_waveform()
    }
}
