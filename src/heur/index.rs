use crate::common::{Clause, Lit, Pair};
use std::collections::{BTreeMap, BTreeSet};

/// The two implication indices derived from a set of 3-literal clauses.
///
/// For a clause `(a, b, c)` the forward index records the pairwise
/// consequence of falsifying each literal — `¬a` entails `b ∨ c`, and
/// symmetrically for `b` and `c` — keyed by the falsified literal. The
/// backward index records, under each negated pair `norm(¬x, ¬y)`, the
/// witnesses that complete some clause through that pair.
///
/// The indices only ever grow: keys are never removed and the set
/// attached to a key never shrinks.
pub struct ImplicationIndex {
    fwd: BTreeMap<Lit, BTreeSet<Pair>>,
    bkw: BTreeMap<Pair, BTreeSet<Lit>>,
}

impl ImplicationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        ImplicationIndex {
            fwd: BTreeMap::new(),
            bkw: BTreeMap::new(),
        }
    }

    /// Ingest one 3-literal clause. All insertions are set insertions,
    /// so re-adding a clause leaves the index contents unchanged.
    pub fn append(&mut self, clause: Clause) {
        let [a, b, c] = clause.lits;

        self.fwd.entry(!a).or_default().insert(Pair::new(b, c));
        self.fwd.entry(!b).or_default().insert(Pair::new(a, c));
        self.fwd.entry(!c).or_default().insert(Pair::new(a, b));

        self.bkw.entry(Pair::new(!b, !c)).or_default().insert(a);
        self.bkw.entry(Pair::new(!a, !b)).or_default().insert(c);
        self.bkw.entry(Pair::new(!a, !c)).or_default().insert(b);
    }

    /// Number of keys in the forward index.
    pub fn n_fwd_keys(&self) -> usize {
        self.fwd.len()
    }

    /// Number of keys in the backward index.
    pub fn n_bkw_keys(&self) -> usize {
        self.bkw.len()
    }

    pub(crate) fn fwd(&self) -> &BTreeMap<Lit, BTreeSet<Pair>> {
        &self.fwd
    }

    pub(crate) fn bkw(&self) -> &BTreeMap<Pair, BTreeSet<Lit>> {
        &self.bkw
    }

    pub(crate) fn fwd_pairs(&self, lit: Lit) -> Option<&BTreeSet<Pair>> {
        self.fwd.get(&lit)
    }
}

impl Default for ImplicationIndex {
    fn default() -> Self {
        ImplicationIndex::new()
    }
}
