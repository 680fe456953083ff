// src/bitrev.rs

/// Number of entries of the bit-reversal table for a transform of
/// `2^l2` samples: one entry per group of four samples.
pub(crate) const fn table_len(l2: usize) -> usize {
    if l2 >= 2 { 1 << (l2 - 2) } else { 0 }
}

/// Fills the bit-reversal table used by the first combined pass.
///
/// Entry `k` is the bit-reversed value of `4k` over `l2` bits. The three
/// other members of the group follow from it: reversing `4k + 1`, `4k + 2`
/// and `4k + 3` adds `N/2`, `N/4` and `3N/4`.
pub(crate) fn precompute_bitrev(bitrev: &mut [u32], l2: usize) {
    debug_assert_eq!(bitrev.len(), table_len(l2));

    for (cnt, slot) in bitrev.iter_mut().enumerate() {
        let mut index = cnt << 2;
        let mut br_index = 0;
        for _ in 0..l2 {
            br_index <<= 1;
            br_index += index & 1;
            index >>= 1;
        }
        *slot = br_index as u32;
    }
}

/// Source positions of the four samples feeding output group `group`.
#[inline(always)]
pub(crate) fn group_indices(bitrev: &[u32], group: usize, quarter: usize) -> [usize; 4] {
    let ri_0 = bitrev[group] as usize;
    [ri_0, ri_0 + 2 * quarter, ri_0 + quarter, ri_0 + 3 * quarter]
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
