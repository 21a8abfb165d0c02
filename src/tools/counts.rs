use std::ops::Add;

use rayon::iter::{
    IntoParallelRefIterator,
    ParallelIterator,
};

use crate::data_structs::typedef::CountType;
use crate::data_structs::{
    Context,
    Read,
    Sequence,
};

/// Observed base counts at reference cytosines of one context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    /// Read showed `C`: the cytosine resisted conversion.
    pub retained:  CountType,
    /// Read showed `T`: a conversion event.
    pub converted: CountType,
    /// All read bases over reference cytosines of this context,
    /// including error substitutions to `A`/`G`.
    pub total:     CountType,
}

impl Tally {
    fn observe(
        &mut self,
        read_base: u8,
    ) {
        self.total += 1;
        match read_base {
            b'C' => self.retained += 1,
            b'T' => self.converted += 1,
            _ => {},
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(
        self,
        rhs: Self,
    ) -> Self::Output {
        Tally {
            retained:  self.retained + rhs.retained,
            converted: self.converted + rhs.converted,
            total:     self.total + rhs.total,
        }
    }
}

/// Per-context tallies of read bases over reference cytosines.
///
/// Context is always re-derived from the original, unconverted
/// reference; reads are registered to it by their start offset, so no
/// alignment is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ContextTallies {
    pub cpg: Tally,
    pub chg: Tally,
    pub chh: Tally,
}

impl ContextTallies {
    /// Scans every read against the reference. Per-read counting is
    /// associative, so the parallel reduction is deterministic.
    pub(crate) fn collect(
        reads: &[Read],
        reference: &Sequence,
    ) -> Self {
        reads
            .par_iter()
            .map(|read| Self::of_read(read, reference))
            .reduce(Self::default, |a, b| a + b)
    }

    fn of_read(
        read: &Read,
        reference: &Sequence,
    ) -> Self {
        let mut tallies = Self::default();
        for (offset, read_base) in read.as_bytes().iter().enumerate() {
            let pos = read.start() + offset;
            if pos >= reference.len() {
                break;
            }
            match reference.context_at(pos) {
                Some(Context::CG) => tallies.cpg.observe(*read_base),
                Some(Context::CHG) => tallies.chg.observe(*read_base),
                Some(Context::CHH) => tallies.chh.observe(*read_base),
                None => {},
            }
        }
        tallies
    }

    /// Aggregate over all three contexts.
    pub(crate) fn overall(&self) -> Tally {
        self.cpg + self.chg + self.chh
    }
}

impl Add for ContextTallies {
    type Output = ContextTallies;

    fn add(
        self,
        rhs: Self,
    ) -> Self::Output {
        ContextTallies {
            cpg: self.cpg + rhs.cpg,
            chg: self.chg + rhs.chg,
            chh: self.chh + rhs.chh,
        }
    }
}
