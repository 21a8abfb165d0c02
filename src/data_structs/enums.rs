use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use super::typedef::PosType;

/// Cytosine methylation context, derived from a position and the two
/// bases following it.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Context {
    /// CG context (cytosine followed by guanine).
    CG,
    /// CHG context (C, non-G, G).
    CHG,
    /// CHH context (C, non-G, non-G).
    CHH,
}

impl Context {
    /// Classifies the base at `pos` within `seq`.
    ///
    /// Returns `None` for anything that is not a cytosine. Cytosines
    /// with fewer than two trailing bases are reported as [`Context::CHH`],
    /// the least specific class. This is the only place where the
    /// end-of-sequence policy lives; callers near sequence ends must
    /// tolerate the approximation.
    pub fn classify(
        seq: &[u8],
        pos: PosType,
    ) -> Option<Context> {
        if seq.get(pos) != Some(&b'C') {
            return None;
        }
        match (seq.get(pos + 1), seq.get(pos + 2)) {
            (Some(b'G'), _) => Some(Context::CG),
            (Some(_), Some(b'G')) => Some(Context::CHG),
            _ => Some(Context::CHH),
        }
    }
}

impl Display for Context {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Context::CG => write!(f, "CG"),
            Context::CHG => write!(f, "CHG"),
            Context::CHH => write!(f, "CHH"),
        }
    }
}

impl FromStr for Context {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CG" | "CPG" => Ok(Context::CG),
            "CHG" => Ok(Context::CHG),
            _ => Ok(Context::CHH),
        }
    }
}

impl Serialize for Context {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Context {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
