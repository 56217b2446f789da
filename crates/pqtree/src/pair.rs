//! The (P,Q) pair type, the acceptability predicate, and the `Domain`
//! context that owns the coprime table and the curated sample pairs.
//!
//! A pair is acceptable when P > Q >= 1, P and Q have opposite parity, and
//! gcd(P,Q) = 1. These are the nodes of the tree the matrix triplets must
//! generate exactly once from the seed (2,1).

use std::fmt;

use crate::coprime::CoprimeTable;
use crate::Vec2;

/// Known-good pairs, seed first. Used both as the acceptability oracle for
/// candidate matrices and as the completeness target of the coverage check.
/// Hand-curated domain knowledge, not derived data.
pub const SAMPLE_PAIRS: [(i64, i64); 13] = [
    (2, 1),
    (3, 2),
    (5, 2),
    (4, 1),
    (4, 3),
    (8, 3),
    (7, 2),
    (8, 5),
    (12, 5),
    (9, 2),
    (7, 4),
    (9, 4),
    (6, 1),
];

/// An integer (P,Q) pair. Transient value; ordering and hashing are
/// structural so pairs can key the per-check seen-set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PqPair {
    pub p: i64,
    pub q: i64,
}

impl PqPair {
    #[inline]
    pub const fn new(p: i64, q: i64) -> Self {
        Self { p, q }
    }

    /// Column-vector view for matrix application.
    #[inline]
    pub fn vector(&self) -> Vec2<i64> {
        Vec2::new(self.p, self.q)
    }

    #[inline]
    pub fn from_vector(v: Vec2<i64>) -> Self {
        Self { p: v.x, q: v.y }
    }
}

impl fmt::Display for PqPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.p, self.q)
    }
}

/// Shared read-only context of one search instance: the built coprime table,
/// the sample table, and the seed pair.
///
/// Constructing the `Domain` is the explicit setup step that fixes the
/// table-before-first-use ordering; everything downstream borrows it.
#[derive(Clone, Debug)]
pub struct Domain {
    coprime: CoprimeTable,
    samples: Vec<PqPair>,
    seed: PqPair,
}

impl Domain {
    pub fn new(coprime: CoprimeTable, samples: Vec<PqPair>, seed: PqPair) -> Self {
        Self {
            coprime,
            samples,
            seed,
        }
    }

    /// The reference instance: default table bound, `SAMPLE_PAIRS`, seed (2,1).
    pub fn reference() -> Self {
        let samples = SAMPLE_PAIRS.iter().map(|&(p, q)| PqPair::new(p, q)).collect();
        Self::new(CoprimeTable::default(), samples, PqPair::new(2, 1))
    }

    #[inline]
    pub fn samples(&self) -> &[PqPair] {
        &self.samples
    }

    #[inline]
    pub fn seed(&self) -> PqPair {
        self.seed
    }

    #[inline]
    pub fn is_coprime(&self, x: i64, y: i64) -> bool {
        self.coprime.is_coprime(x, y)
    }

    /// P > Q >= 1, opposite parity, coprime.
    #[inline]
    pub fn pair_is_acceptable(&self, pair: PqPair) -> bool {
        pair.p > pair.q
            && pair.q >= 1
            && (pair.p & 1) != (pair.q & 1)
            && self.is_coprime(pair.p, pair.q)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::reference()
    }
}
