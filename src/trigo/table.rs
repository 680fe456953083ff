// src/trigo/table.rs

use crate::common::{FftNum, TRIGO_BD_LIMIT, cos_sin};
use core::f64::consts::PI;

/// Deepest pass served by the table for a transform of `2^l2` samples.
const fn top_level(l2: usize) -> usize {
    if l2 - 1 < TRIGO_BD_LIMIT { l2 - 1 } else { TRIGO_BD_LIMIT }
}

/// Number of cosines stored for a transform of `2^l2` samples.
///
/// Levels `3..=top_level` are stored back to back; level `k` holds
/// `2^(k-1)` values, so the total is `2^top_level - 4`.
pub(crate) const fn table_len(l2: usize) -> usize {
    if l2 <= 3 { 0 } else { (1 << top_level(l2)) - 4 }
}

/// Offset of level `level` inside the table.
#[inline(always)]
pub(crate) const fn level_index(level: usize) -> usize {
    (1 << (level - 1)) - 4
}

/// Cosines of level `level`: `cos(i * PI / 2^level)` for `i` in `0..2^(level-1)`.
#[inline(always)]
pub(crate) fn level_slice<T>(cosines: &[T], level: usize) -> &[T] {
    let start = level_index(level);
    &cosines[start..start + (1 << (level - 1))]
}

/// Fills the cosine table for a transform of `2^l2` samples.
pub(crate) fn precompute_cosines<T: FftNum>(cosines: &mut [T], l2: usize) {
    debug_assert_eq!(cosines.len(), table_len(l2));
    if l2 <= 3 {
        return;
    }

    for level in 3..=top_level(l2) {
        let level_len = 1usize << (level - 1);
        let start = level_index(level);
        let mul = PI / (level_len << 1) as f64;
        for (i, c) in cosines[start..start + level_len].iter_mut().enumerate() {
            *c = T::from_f64_lossy(cos_sin(i as f64 * mul).0);
        }
    }
}

/// Twiddles of one table-driven pass.
///
/// `sin(i * PI / 2^level)` is read from the same level as
/// `cos((h - i) * PI / 2^level)`, with `h = 2^(level-1)`.
#[derive(Clone, Copy)]
pub(crate) struct LevelCosines<'a, T> {
    cosines: &'a [T],
    half: usize,
}

impl<'a, T: FftNum> LevelCosines<'a, T> {
    pub(crate) fn new(cosines: &'a [T], level: usize) -> Self {
        Self {
            cosines: level_slice(cosines, level),
            half: 1 << (level - 1),
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, i: usize) -> (T, T) {
        (self.cosines[i], self.cosines[self.half - i])
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
