//! Exhaustive search for triplets of 2x2 integer matrices that generate the
//! tree of primitive Pythagorean-style (P,Q) pairs from the seed (2,1),
//! every pair exactly once.
//!
//! Pipeline, leaves first: `coprime` → `pair` → `matrix` → `enumerate` →
//! `coverage` → `search`. The cli crate is the only intended consumer of the
//! printed results; everything here is deterministic batch computation.

pub mod coprime;
pub mod coverage;
pub mod enumerate;
pub mod matrix;
pub mod pair;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so pair/matrix code reads in linear-algebra terms.
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Fatal configuration errors. The search itself is pure and deterministic;
/// these mean a bound is too small for the requested run and must be raised
/// by the caller, never recovered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The accepted-matrix set filled up mid-enumeration.
    #[error("accepted-matrix capacity exceeded (limit {limit}); raise the capacity or narrow the coefficient range")]
    MatrixCapacity { limit: usize },
    /// One coverage frontier layer would exceed its cap.
    #[error("coverage frontier capacity exceeded (limit {limit}, needed {needed}); derive the cap from the depth")]
    FrontierCapacity { limit: usize, needed: usize },
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coprime::{coprime_slow, CoprimeTable, DEFAULT_COPRIME_BOUND};
    pub use crate::coverage::{coverage_is_good, CoverageCfg};
    pub use crate::enumerate::{enumerate_matrices, AcceptedMatrix, EnumCfg};
    pub use crate::matrix::{PqMatrix, NAMED_MATRICES};
    pub use crate::pair::{Domain, PqPair, SAMPLE_PAIRS};
    pub use crate::search::{search_triplets, search_with_defaults, Triplet};
    pub use crate::Error;
}
