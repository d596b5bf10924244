//! Validated binary input.
//!
//! [`BitSequence`] is the only way bits reach the encoder. Construction
//! rejects empty input and any symbol outside `{0, 1}`, so the encoder never
//! has to handle malformed data.

use crate::error::{InvalidInput, LineCodeError, Result};
use std::fmt;
use std::str::FromStr;

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    /// Binary `0`.
    Zero,
    /// Binary `1`.
    One,
}

impl Bit {
    /// Returns `true` for [`Bit::One`].
    #[inline]
    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    /// The digit character for this bit.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(other),
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A non-empty, ordered sequence of bits.
///
/// # Example
///
/// ```rust
/// use linecode::BitSequence;
///
/// let bits: BitSequence = "1011".parse().unwrap();
/// assert_eq!(bits.len(), 4);
/// assert_eq!(bits.to_string(), "1011");
///
/// assert!("".parse::<BitSequence>().is_err());
/// assert!("10a1".parse::<BitSequence>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<Bit>,
}

impl BitSequence {
    /// Validates a string of `0`/`1` characters.
    ///
    /// Whitespace, including leading or trailing spaces, is rejected like
    /// any other non-binary character.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(InvalidInput::Empty.into());
        }

        let bits = input
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Bit::try_from(c).map_err(|found| InvalidInput::InvalidBit { position, found })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }

    /// Unpacks bytes MSB-first into a bit sequence.
    ///
    /// ```rust
    /// use linecode::BitSequence;
    ///
    /// let bits = BitSequence::from_bytes(&[0xA5]).unwrap();
    /// assert_eq!(bits.to_string(), "10100101");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(InvalidInput::Empty.into());
        }

        let bits = bytes
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| Bit::from((byte >> shift) & 1 == 1)))
            .collect();

        Ok(Self { bits })
    }

    /// Decodes a hexadecimal payload and unpacks it MSB-first.
    #[cfg(feature = "base64")]
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = data_encoding::HEXLOWER_PERMISSIVE
            .decode(input.trim().as_bytes())
            .map_err(|e| LineCodeError::Decode(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Decodes a base64 payload and unpacks it MSB-first.
    #[cfg(feature = "base64")]
    pub fn from_base64(input: &str) -> Result<Self> {
        let bytes = data_encoding::BASE64
            .decode(input.trim().as_bytes())
            .map_err(|e| LineCodeError::Decode(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Number of bits. Never zero.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the bits in order.
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }
}

impl FromStr for BitSequence {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl AsRef<[Bit]> for BitSequence {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}
