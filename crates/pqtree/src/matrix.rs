//! 2x2 integer generator matrices: determinant, forward (descend) and
//! determinant-scaled inverse (ascend) application, the sample-table
//! acceptability filter, and recognition of the known named generators.

use std::fmt;

use crate::pair::{Domain, PqPair};
use crate::Mat2;

/// Coefficient tuples of the known named generators. Extensible data, not
/// hard-coded comparisons; unnamed matrices render as ".".
pub const NAMED_MATRICES: &[((i64, i64, i64, i64), &str)] = &[
    ((2, -1, 1, 0), "U"),
    ((2, 1, 1, 0), "A"),
    ((1, 2, 0, 1), "D"),
    ((1, 1, 0, 2), "K1"),
    ((2, 0, 1, -1), "K2"),
    ((2, 0, 1, 1), "K3"),
];

/// A 2x2 integer matrix (a b / c d) acting on pairs as
/// `(p,q) -> (a p + b q, c p + d q)`. Immutable, structural identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PqMatrix {
    m: Mat2<i64>,
}

impl PqMatrix {
    #[inline]
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self {
            m: Mat2::new(a, b, c, d),
        }
    }

    #[inline]
    pub fn a(&self) -> i64 {
        self.m[(0, 0)]
    }
    #[inline]
    pub fn b(&self) -> i64 {
        self.m[(0, 1)]
    }
    #[inline]
    pub fn c(&self) -> i64 {
        self.m[(1, 0)]
    }
    #[inline]
    pub fn d(&self) -> i64 {
        self.m[(1, 1)]
    }

    /// ad - bc.
    #[inline]
    pub fn det(&self) -> i64 {
        self.a() * self.d() - self.b() * self.c()
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.det() != 0
    }

    /// Forward application: move from a pair to one of its children.
    #[inline]
    pub fn descend(&self, pair: PqPair) -> PqPair {
        PqPair::from_vector(self.m * pair.vector())
    }

    /// Determinant-scaled inverse: the candidate parent of `pair` under this
    /// matrix, or `None` when the adjugate image is not exactly divisible by
    /// the determinant. Divisibility is checked before any division.
    #[inline]
    pub fn ascend(&self, pair: PqPair) -> Option<PqPair> {
        let det = self.det();
        debug_assert!(det != 0);
        let adj = Mat2::new(self.d(), -self.b(), -self.c(), self.a());
        let up = adj * pair.vector();
        if up.x % det != 0 || up.y % det != 0 {
            return None;
        }
        Some(PqPair::new(up.x / det, up.y / det))
    }

    /// Recognized name from `NAMED_MATRICES`, if any.
    pub fn name(&self) -> Option<&'static str> {
        let key = (self.a(), self.b(), self.c(), self.d());
        NAMED_MATRICES
            .iter()
            .find(|(coeffs, _)| *coeffs == key)
            .map(|&(_, name)| name)
    }
}

impl fmt::Display for PqMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.a(), self.b(), self.c(), self.d())
    }
}

impl Domain {
    /// Necessary filter for generator candidates: invertible, and every
    /// sample pair descends to another acceptable pair. Full sufficiency is
    /// left to the triplet coverage check.
    pub fn matrix_is_acceptable(&self, m: &PqMatrix) -> bool {
        if !m.is_invertible() {
            return false;
        }
        self.samples()
            .iter()
            .all(|&pq| self.pair_is_acceptable(m.descend(pq)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_and_invertibility() {
        assert_eq!(PqMatrix::new(2, -1, 1, 0).det(), 1);
        assert_eq!(PqMatrix::new(1, 2, 0, 1).det(), 1);
        assert_eq!(PqMatrix::new(1, 3, 0, 2).det(), 2);
        let singular = PqMatrix::new(2, 4, 1, 2);
        assert_eq!(singular.det(), 0);
        assert!(!singular.is_invertible());
    }

    #[test]
    fn zero_determinant_never_accepted() {
        let dom = Domain::reference();
        assert!(!dom.matrix_is_acceptable(&PqMatrix::new(2, 4, 1, 2)));
        assert!(!dom.matrix_is_acceptable(&PqMatrix::new(0, 0, 0, 0)));
    }

    #[test]
    fn reference_generators_pass_the_filter() {
        let dom = Domain::reference();
        for (coeffs, name) in [((2, -1, 1, 0), "U"), ((2, 1, 1, 0), "A"), ((1, 2, 0, 1), "D")] {
            let m = PqMatrix::new(coeffs.0, coeffs.1, coeffs.2, coeffs.3);
            assert!(dom.matrix_is_acceptable(&m), "{name} must pass the filter");
            assert_eq!(m.name(), Some(name));
        }
    }

    #[test]
    fn descend_matches_coefficients() {
        let u = PqMatrix::new(2, -1, 1, 0);
        // U maps (2,1) to (3,2)
        assert_eq!(u.descend(PqPair::new(2, 1)), PqPair::new(3, 2));
        let d = PqMatrix::new(1, 2, 0, 1);
        assert_eq!(d.descend(PqPair::new(2, 1)), PqPair::new(4, 1));
    }

    #[test]
    fn ascend_inverts_descend() {
        let dom = Domain::reference();
        for (a, b, c, d) in [(2, -1, 1, 0), (2, 1, 1, 0), (1, 2, 0, 1), (1, 3, 0, 2)] {
            let m = PqMatrix::new(a, b, c, d);
            for &pq in dom.samples() {
                let child = m.descend(pq);
                assert_eq!(m.ascend(child), Some(pq), "matrix {m}, pair {pq}");
            }
        }
    }

    #[test]
    fn ascend_rejects_non_divisible() {
        // det 2, adjugate image of (4,1) is (5,1): not divisible
        let m = PqMatrix::new(1, 3, 0, 2);
        assert_eq!(m.ascend(PqPair::new(4, 1)), None);
    }

    #[test]
    fn unnamed_matrix_has_no_name() {
        assert_eq!(PqMatrix::new(3, -2, 2, -1).name(), None);
    }
}
