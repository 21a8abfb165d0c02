use std::fmt::Display;

use anyhow::bail;
use serde::{
    Deserialize,
    Serialize,
};

use super::enums::Context;
use super::typedef::{
    PosType,
    NUCLEOTIDES,
};

/// An immutable nucleotide sequence over the alphabet {A, T, C, G}.
///
/// Stored as upper-case ASCII bytes. Construction validates the
/// alphabet; once built, the content never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence(Vec<u8>);

/// A bisulfite-converted sequence. Length-preserving transform of a
/// [`Sequence`]; context must always be re-derived from the original,
/// since conversion destroys it for unmethylated cytosines.
pub type ConvertedSequence = Sequence;

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn get(
        &self,
        pos: PosType,
    ) -> Option<u8> {
        self.0.get(pos).copied()
    }

    /// Context of the base at `pos`, with the end-of-sequence policy of
    /// [`Context::classify`].
    pub fn context_at(
        &self,
        pos: PosType,
    ) -> Option<Context> {
        Context::classify(&self.0, pos)
    }

    /// Fraction of G/C bases, for composition sanity checks.
    pub fn gc_fraction(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let gc = self
            .0
            .iter()
            .filter(|b| matches!(b, b'G' | b'C'))
            .count();
        gc as f64 / self.0.len() as f64
    }

    pub(crate) fn from_raw(bases: Vec<u8>) -> Self {
        debug_assert!(bases.iter().all(|b| NUCLEOTIDES.contains(b)));
        Self(bases)
    }
}

impl TryFrom<Vec<u8>> for Sequence {
    type Error = anyhow::Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        let value = value.to_ascii_uppercase();
        if let Some(bad) = value
            .iter()
            .find(|b| !NUCLEOTIDES.contains(b))
        {
            bail!("invalid nucleotide symbol: {:?}", *bad as char);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sequence {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Sequence::try_from(value.as_bytes().to_vec())
    }
}

impl Display for Sequence {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Per-position methylation flags for a [`Sequence`].
///
/// Invariant: the pattern is as long as the sequence it was derived
/// from, and only cytosine positions may be `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethylationPattern(Vec<bool>);

impl MethylationPattern {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Methylation flag at `pos`, `None` past the pattern end.
    pub fn get(
        &self,
        pos: PosType,
    ) -> Option<bool> {
        self.0.get(pos).copied()
    }

    pub fn count_methylated(&self) -> usize {
        self.0.iter().filter(|m| **m).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

/// A sequencing read: a contiguous slice of a converted sequence,
/// registered to the reference by its start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Read {
    start: PosType,
    bases: Vec<u8>,
}

impl Read {
    pub fn new(
        start: PosType,
        bases: Vec<u8>,
    ) -> Self {
        Self { start, bases }
    }

    /// Offset of the first base relative to the reference.
    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub(crate) fn bases_mut(&mut self) -> &mut [u8] {
        &mut self.bases
    }
}
