pub(crate) mod oscillator;
pub(crate) mod table;

pub use oscillator::{OscLease, TrigOscillator};

use crate::common::{FftNum, TRIGO_BD_LIMIT};
use core::f64::consts::PI;

/// Number of oscillators needed by a transform of `2^l2` samples: one per
/// pass past [`TRIGO_BD_LIMIT`].
pub(crate) const fn oscillator_count(l2: usize) -> usize {
    l2.saturating_sub(TRIGO_BD_LIMIT + 1)
}

/// Pass served by oscillator `index`.
#[inline(always)]
pub(crate) const fn oscillator_pass(index: usize) -> usize {
    TRIGO_BD_LIMIT + 1 + index
}

/// Configures each oscillator with the base angle `PI / 2^pass` of its pass.
pub(crate) fn setup_oscillators<T: FftNum>(oscillators: &mut [TrigOscillator<T>]) {
    for (index, osc) in oscillators.iter_mut().enumerate() {
        let len = (1u64 << oscillator_pass(index)) as f64;
        osc.set_step(PI / len);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
