//! Exhaustive enumeration of candidate generator matrices over a bounded
//! coefficient range, with a capacity-guarded accepted set.

use crate::matrix::PqMatrix;
use crate::pair::Domain;
use crate::Error;

/// Enumeration bounds and the accepted-set capacity.
///
/// The triplet search is cubic in the accepted count, so these are the
/// primary cost knobs. Capacity overflow is surfaced as an error, never a
/// silent truncation.
#[derive(Clone, Copy, Debug)]
pub struct EnumCfg {
    /// Inclusive lower bound for each coefficient.
    pub term_min: i64,
    /// Inclusive upper bound for each coefficient.
    pub term_max: i64,
    /// Maximum size of the accepted-matrix set.
    pub max_matrices: usize,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            term_min: -5,
            term_max: 5,
            max_matrices: 50_000,
        }
    }
}

/// A filter-passing matrix together with its precomputed determinant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptedMatrix {
    pub matrix: PqMatrix,
    pub det: i64,
}

impl AcceptedMatrix {
    #[inline]
    pub fn new(matrix: PqMatrix) -> Self {
        Self {
            det: matrix.det(),
            matrix,
        }
    }
}

/// Enumerate every (a,b,c,d) in the inclusive range, lexicographically, and
/// keep the matrices passing `Domain::matrix_is_acceptable`.
///
/// Errors with `Error::MatrixCapacity` if the accepted set would exceed
/// `cfg.max_matrices`; the caller must raise the capacity or narrow the
/// range.
pub fn enumerate_matrices(dom: &Domain, cfg: &EnumCfg) -> Result<Vec<AcceptedMatrix>, Error> {
    let mut accepted = Vec::new();
    for a in cfg.term_min..=cfg.term_max {
        for b in cfg.term_min..=cfg.term_max {
            for c in cfg.term_min..=cfg.term_max {
                for d in cfg.term_min..=cfg.term_max {
                    let m = PqMatrix::new(a, b, c, d);
                    if !dom.matrix_is_acceptable(&m) {
                        continue;
                    }
                    if accepted.len() >= cfg.max_matrices {
                        return Err(Error::MatrixCapacity {
                            limit: cfg.max_matrices,
                        });
                    }
                    accepted.push(AcceptedMatrix::new(m));
                }
            }
        }
    }
    Ok(accepted)
}
