//! Triplet search driver: every i<j<k combination of the accepted matrices
//! against the coverage check, in enumeration order, with no early exit.

use std::fmt;

use crate::coverage::{coverage_is_good, CoverageCfg};
use crate::enumerate::{enumerate_matrices, AcceptedMatrix, EnumCfg};
use crate::pair::Domain;
use crate::Error;

/// A qualifying triplet, in enumeration order of its members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triplet {
    pub ms: [AcceptedMatrix; 3],
}

impl Triplet {
    /// Recognized names of the three matrices, "." where unnamed.
    pub fn names(&self) -> [&'static str; 3] {
        self.ms.map(|am| am.matrix.name().unwrap_or("."))
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [m1, m2, m3] = &self.ms;
        let [n1, n2, n3] = self.names();
        write!(
            f,
            "{}  {}  {}   {} {} {}",
            m1.matrix, m2.matrix, m3.matrix, n1, n2, n3
        )
    }
}

/// Test every 3-combination of `accepted` with the coverage check and
/// collect the qualifying triplets.
///
/// Exhaustive by design: the full cubic loop runs even after hits, so the
/// result lists *all* qualifying triplets, ordered by the enumeration order
/// of their members. Capacity errors from the checker propagate.
pub fn search_triplets(
    dom: &Domain,
    accepted: &[AcceptedMatrix],
    cfg: &CoverageCfg,
) -> Result<Vec<Triplet>, Error> {
    let mut found = Vec::new();
    for i in 0..accepted.len() {
        for j in (i + 1)..accepted.len() {
            for k in (j + 1)..accepted.len() {
                let combo = [&accepted[i], &accepted[j], &accepted[k]];
                if coverage_is_good(dom, combo, cfg)? {
                    found.push(Triplet {
                        ms: [accepted[i], accepted[j], accepted[k]],
                    });
                }
            }
        }
    }
    Ok(found)
}

/// Full run with the reference domain and default bounds: enumerate, then
/// search. Returns the accepted set alongside the qualifying triplets.
pub fn search_with_defaults() -> Result<(Vec<AcceptedMatrix>, Vec<Triplet>), Error> {
    let dom = Domain::reference();
    let accepted = enumerate_matrices(&dom, &EnumCfg::default())?;
    let found = search_triplets(&dom, &accepted, &CoverageCfg::default())?;
    Ok((accepted, found))
}
