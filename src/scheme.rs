//! The closed catalogue of supported line-coding schemes.

use crate::error::{LineCodeError, Result};
use std::fmt;
use std::str::FromStr;

/// Line-coding scheme selector.
///
/// The set is fixed; [`Scheme::ALL`] lists every value in catalogue order,
/// which is also the order used by the compare-all view.
///
/// # Example
///
/// ```rust
/// use linecode::Scheme;
///
/// let scheme: Scheme = "differential manchester".parse().unwrap();
/// assert_eq!(scheme, Scheme::DifferentialManchester);
/// assert_eq!(scheme.name(), "Differential Manchester");
/// assert_eq!(scheme.samples_per_bit(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Unipolar: `1` is high, `0` is zero volts.
    Unipolar,
    /// Non-return-to-zero level: `1` high, `0` low.
    #[default]
    NrzL,
    /// Non-return-to-zero inverted: transition on every `1`.
    NrzI,
    /// Return-to-zero: each bit returns to zero at half period.
    Rz,
    /// Manchester: `1` is high-to-low, `0` is low-to-high.
    Manchester,
    /// Differential Manchester: transition at bit start encodes `0`.
    DifferentialManchester,
    /// Alternate mark inversion.
    Ami,
    /// Bipolar with 8-zero substitution (substitution not applied).
    B8zs,
    /// High-density bipolar 3 (substitution not applied).
    Hdb3,
}

impl Scheme {
    /// Every scheme in catalogue order.
    pub const ALL: [Scheme; 9] = [
        Scheme::Unipolar,
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::Rz,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
        Scheme::Ami,
        Scheme::B8zs,
        Scheme::Hdb3,
    ];

    /// Human-readable catalogue name.
    pub fn name(&self) -> &'static str {
        use Scheme::*;
        match self {
            Unipolar => "Unipolar",
            NrzL => "NRZ-L",
            NrzI => "NRZ-I",
            Rz => "RZ",
            Manchester => "Manchester",
            DifferentialManchester => "Differential Manchester",
            Ami => "AMI",
            B8zs => "B8ZS",
            Hdb3 => "HDB3",
        }
    }

    /// Number of signal samples emitted per input bit.
    pub fn samples_per_bit(&self) -> usize {
        match self {
            Scheme::Rz | Scheme::Manchester | Scheme::DifferentialManchester => 2,
            _ => 1,
        }
    }

    /// Lowest and highest level this scheme can emit.
    pub fn level_range(&self) -> (i8, i8) {
        match self {
            Scheme::Unipolar => (0, 1),
            _ => (-1, 1),
        }
    }

    /// Looks a scheme up by name.
    ///
    /// Matching ignores ASCII case as well as `-`, `_` and spaces, so
    /// `"nrz-i"`, `"NRZ_I"` and `"nrzi"` all resolve to [`Scheme::NrzI`].
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|scheme| normalize(scheme.name()) == wanted)
            .ok_or_else(|| LineCodeError::UnknownScheme(name.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Scheme {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name table backing scheme selection controls, in catalogue order.
pub fn catalog() -> impl Iterator<Item = (&'static str, Scheme)> {
    Scheme::ALL.into_iter().map(|scheme| (scheme.name(), scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = catalog().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "Unipolar",
                "NRZ-L",
                "NRZ-I",
                "RZ",
                "Manchester",
                "Differential Manchester",
                "AMI",
                "B8ZS",
                "HDB3"
            ]
        );
    }

    #[test]
    fn test_names_resolve_back() {
        for scheme in Scheme::ALL {
            assert_eq!(Scheme::from_name(scheme.name()).unwrap(), scheme);
            assert_eq!(scheme.to_string().parse::<Scheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_lenient_names() {
        assert_eq!(Scheme::from_name("nrz_i").unwrap(), Scheme::NrzI);
        assert_eq!(Scheme::from_name("nrzl").unwrap(), Scheme::NrzL);
        assert_eq!(
            Scheme::from_name("DifferentialManchester").unwrap(),
            Scheme::DifferentialManchester
        );
        assert_eq!(Scheme::from_name("hdb3").unwrap(), Scheme::Hdb3);
    }

    #[test]
    fn test_unknown_scheme_fails_fast() {
        match Scheme::from_name("4B5B") {
            Err(LineCodeError::UnknownScheme(name)) => assert_eq!(name, "4B5B"),
            other => panic!("Expected UnknownScheme, got {other:?}"),
        }
        assert!(Scheme::from_name("").is_err());
    }

    #[test]
    fn test_samples_per_bit() {
        let dual: Vec<_> = Scheme::ALL
            .into_iter()
            .filter(|s| s.samples_per_bit() == 2)
            .collect();
        assert_eq!(
            dual,
            [Scheme::Rz, Scheme::Manchester, Scheme::DifferentialManchester]
        );
    }
}
