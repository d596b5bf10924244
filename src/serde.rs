//! Serde support for the public data types.
//!
//! Serialization is hand-written so the JSON shape stays stable and carries
//! derived information (scheme names, sample counts) that consumers would
//! otherwise have to recompute.

use crate::bits::BitSequence;
use crate::scheme::Scheme;
use crate::signal::{Signal, Waveform};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

impl Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Scheme", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("samples_per_bit", &self.samples_per_bit())?;
        state.end()
    }
}

/// Accepts either a bare name (`"NRZ-I"`) or the serialized object form.
impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemeVisitor;

        impl<'de> Visitor<'de> for SchemeVisitor {
            type Value = Scheme;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a scheme name or an object with a `name` field")
            }

            fn visit_str<E>(self, v: &str) -> Result<Scheme, E>
            where
                E: de::Error,
            {
                Scheme::from_name(v).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Scheme, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut scheme = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "name" {
                        let name: String = map.next_value()?;
                        scheme = Some(Scheme::from_name(&name).map_err(de::Error::custom)?);
                    } else {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }
                scheme.ok_or_else(|| de::Error::missing_field("name"))
            }
        }

        deserializer.deserialize_any(SchemeVisitor)
    }
}

impl Serialize for BitSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        BitSequence::parse(&text).map_err(de::Error::custom)
    }
}

impl Serialize for Signal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Signal", 5)?;
        state.serialize_field("scheme", &self.scheme)?;
        state.serialize_field("bits", &self.bits)?;
        state.serialize_field("sample_count", &self.levels.len())?;
        state.serialize_field(
            "bit_positions",
            &self.bit_positions().collect::<Vec<_>>(),
        )?;
        state.serialize_field("levels", &self.levels)?;
        state.end()
    }
}

impl Serialize for Waveform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Waveform", 3)?;
        state.serialize_field("scheme", &self.scheme)?;
        state.serialize_field("sample_count", &self.samples.len())?;
        state.serialize_field("samples", &self.samples)?;
        state.end()
    }
}
