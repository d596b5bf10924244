//! # linecode
//!
//! Encode binary sequences into digital line-code waveforms.
//!
//! Nine schemes are supported: Unipolar, NRZ-L, NRZ-I, RZ, Manchester,
//! Differential Manchester, AMI, B8ZS and HDB3. B8ZS and HDB3 currently
//! produce the same output as AMI; zero-run substitution is not applied.
//!
//! Input is validated once, when a [`BitSequence`] is built. After that,
//! [`encode`] is a total function. Noise, rendering and export are
//! downstream consumers of the resulting [`Signal`] and never influence it.
//!
//! ## Quick Start
//!
//! ```rust
//! use linecode::{encode, BitSequence, Scheme};
//!
//! let bits: BitSequence = "10".parse().unwrap();
//! let signal = encode(&bits, Scheme::Manchester);
//! assert_eq!(signal.levels(), &[1, -1, -1, 1]);
//! ```
//!
//! ## Features
//!
//! - `serde` (default): JSON-friendly `Serialize` implementations.
//! - `base64`: hex and base64 payload input via `data-encoding`.
//! - `cli`: the `linecode` command-line tool.

mod bits;
mod encoder;
mod error;
mod scheme;
mod signal;

pub mod export;
pub mod noise;
pub mod render;

#[cfg(feature = "serde")]
mod serde;


pub use bits::{Bit, BitSequence};
pub use encoder::{
    ami, b8zs, compare_all, differential_manchester, encode, encode_levels, hdb3, manchester,
    nrz_i, nrz_l, rz, unipolar,
};
pub use error::{InvalidInput, LineCodeError, Result};
pub use scheme::{Scheme, catalog};
pub use signal::{Signal, SignalLevel, Waveform};
