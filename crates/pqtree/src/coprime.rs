//! Coprimality oracle: a brute-force table for the small domain the search
//! lives in, with a subtract-and-shift fallback above the table bound.
//!
//! The table is built once during `Domain` setup and read-only afterwards;
//! the fallback never divides, so it is total on positive inputs.

/// Side length of the default precomputed table.
pub const DEFAULT_COPRIME_BOUND: usize = 200;

/// Coprimality test without a table: iterative subtraction keeping the larger
/// argument first, stripping factors of two from each side.
///
/// Terminates at `y == 1` (coprime) or `x == 0` after a subtraction (the
/// arguments shared a factor). An even/even input is rejected up front so the
/// shift loops always make progress.
pub fn coprime_slow(mut x: i64, mut y: i64) -> bool {
    if x < 1 || y < 1 {
        return false;
    }
    if x & 1 == 0 && y & 1 == 0 {
        return false;
    }
    loop {
        if x < y {
            std::mem::swap(&mut x, &mut y);
        }
        if y == 1 {
            return true;
        }
        x -= y;
        if x == 0 {
            return false;
        }
        while x & 1 == 0 {
            x >>= 1;
        }
        while y & 1 == 0 {
            y >>= 1;
        }
    }
}

/// Precomputed coprimality answers for `0 <= x, y < bound`.
#[derive(Clone, Debug)]
pub struct CoprimeTable {
    bound: i64,
    table: Vec<bool>,
}

impl CoprimeTable {
    /// Build the table by brute force over the full `bound x bound` square.
    pub fn new(bound: usize) -> Self {
        let mut table = vec![false; bound * bound];
        for x in 0..bound {
            for y in 0..bound {
                table[x * bound + y] = coprime_slow(x as i64, y as i64);
            }
        }
        Self {
            bound: bound as i64,
            table,
        }
    }

    #[inline]
    pub fn bound(&self) -> usize {
        self.bound as usize
    }

    /// Coprimality of `x` and `y`. False for arguments below 1 and for
    /// `x == y` (the search domain never pairs a value with itself).
    #[inline]
    pub fn is_coprime(&self, x: i64, y: i64) -> bool {
        if x < 1 || y < 1 || x == y {
            return false;
        }
        if x < self.bound && y < self.bound {
            self.table[(x * self.bound + y) as usize]
        } else {
            coprime_slow(x, y)
        }
    }
}

impl Default for CoprimeTable {
    fn default() -> Self {
        Self::new(DEFAULT_COPRIME_BOUND)
    }
}
