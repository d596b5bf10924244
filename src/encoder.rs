//! The line encoder.
//!
//! Each scheme is a left-to-right traversal of the bits. Schemes with
//! memory (NRZ-I, Differential Manchester and the AMI family) thread their
//! running level through an explicit `scan` accumulator that lives only for
//! the duration of one call, so repeated calls never influence each other.

use crate::bits::{Bit, BitSequence};
use crate::scheme::Scheme;
use crate::signal::{Signal, SignalLevel};
use tracing::trace;

/// Encodes `bits` with `scheme`.
///
/// This function cannot fail: [`BitSequence`] has already been validated
/// and the scheme set is closed.
///
/// # Example
///
/// ```rust
/// use linecode::{encode, BitSequence, Scheme};
///
/// let bits: BitSequence = "1011".parse().unwrap();
/// let signal = encode(&bits, Scheme::Ami);
/// assert_eq!(signal.levels(), &[1, 0, -1, 1]);
/// ```
pub fn encode(bits: &BitSequence, scheme: Scheme) -> Signal {
    let levels = encode_levels(bits.as_slice(), scheme);
    trace!(
        scheme = scheme.name(),
        bits = bits.len(),
        samples = levels.len(),
        "encoded"
    );
    Signal {
        scheme,
        bits: bits.clone(),
        levels,
    }
}

/// Encodes `bits` with every catalogue scheme, in catalogue order.
pub fn compare_all(bits: &BitSequence) -> Vec<Signal> {
    Scheme::ALL
        .into_iter()
        .map(|scheme| encode(bits, scheme))
        .collect()
}

/// Dispatches to the per-scheme algorithm on raw bits.
///
/// An empty slice yields an empty level vector.
pub fn encode_levels(bits: &[Bit], scheme: Scheme) -> Vec<SignalLevel> {
    match scheme {
        Scheme::Unipolar => unipolar(bits),
        Scheme::NrzL => nrz_l(bits),
        Scheme::NrzI => nrz_i(bits),
        Scheme::Rz => rz(bits),
        Scheme::Manchester => manchester(bits),
        Scheme::DifferentialManchester => differential_manchester(bits),
        Scheme::Ami => ami(bits),
        Scheme::B8zs => b8zs(bits),
        Scheme::Hdb3 => hdb3(bits),
    }
}

/// `1` is +1, `0` is 0.
pub fn unipolar(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter().map(|b| if b.is_one() { 1 } else { 0 }).collect()
}

/// `1` is +1, `0` is -1.
pub fn nrz_l(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter().map(|b| if b.is_one() { 1 } else { -1 }).collect()
}

/// Level starts at +1 and inverts before emitting on every `1`.
pub fn nrz_i(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter()
        .scan(1, |level: &mut SignalLevel, b| {
            if b.is_one() {
                *level = -*level;
            }
            Some(*level)
        })
        .collect()
}

/// Each bit emits its NRZ level followed by a return to 0.
pub fn rz(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter()
        .flat_map(|b| if b.is_one() { [1, 0] } else { [-1, 0] })
        .collect()
}

/// `1` emits `(+1, -1)`, `0` emits `(-1, +1)`.
pub fn manchester(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter()
        .flat_map(|b| if b.is_one() { [1, -1] } else { [-1, 1] })
        .collect()
}

/// Level starts at +1 and inverts on every `0`; each bit emits
/// `(level, -level)`.
pub fn differential_manchester(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter()
        .scan(1, |level: &mut SignalLevel, b| {
            if !b.is_one() {
                *level = -*level;
            }
            Some([*level, -*level])
        })
        .flatten()
        .collect()
}

/// Zeros emit 0. Marks alternate polarity starting from a −1 seed, so the
/// first `1` is +1; zeros never touch the polarity.
pub fn ami(bits: &[Bit]) -> Vec<SignalLevel> {
    bits.iter()
        .scan(-1, |polarity: &mut SignalLevel, b| {
            if b.is_one() {
                *polarity = -*polarity;
                Some(*polarity)
            } else {
                Some(0)
            }
        })
        .collect()
}

/// Same output as [`ami`]; eight-zero substitution is not applied.
pub fn b8zs(bits: &[Bit]) -> Vec<SignalLevel> {
    ami(bits)
}

/// Same output as [`ami`]; four-zero substitution is not applied.
pub fn hdb3(bits: &[Bit]) -> Vec<SignalLevel> {
    ami(bits)
}
