// src/trigo/oscillator.rs

use crate::common::{FftNum, cos_sin};

/// Sine/cosine generator driven by a complex rotation.
///
/// Each [`step`](TrigOscillator::step) advances the phase by a fixed angle
/// using four multiplications and two additions. The phase is never
/// renormalised: rounding drift over a run is part of the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigOscillator<T> {
    pos_cos: T,
    pos_sin: T,
    step_cos: T,
    step_sin: T,
}

impl<T: FftNum> TrigOscillator<T> {
    /// Oscillator at angle 0 with a null step.
    pub fn new() -> Self {
        Self {
            pos_cos: T::one(),
            pos_sin: T::zero(),
            step_cos: T::one(),
            step_sin: T::zero(),
        }
    }

    /// Sets the angle added by each step, in radians, and moves the phase
    /// back to 0.
    pub fn set_step(&mut self, angle_rad: f64) {
        let (c, s) = cos_sin(angle_rad);
        self.step_cos = T::from_f64_lossy(c);
        self.step_sin = T::from_f64_lossy(s);
        self.clear_buffers();
    }

    #[inline(always)]
    pub fn cos(&self) -> T {
        self.pos_cos
    }

    #[inline(always)]
    pub fn sin(&self) -> T {
        self.pos_sin
    }

    #[inline(always)]
    pub fn step(&mut self) {
        let old_cos = self.pos_cos;
        let old_sin = self.pos_sin;

        self.pos_cos = old_cos * self.step_cos - old_sin * self.step_sin;
        self.pos_sin = old_cos * self.step_sin + old_sin * self.step_cos;
    }

    /// Moves the phase back to 0, keeping the step.
    #[inline(always)]
    pub fn clear_buffers(&mut self) {
        self.pos_cos = T::one();
        self.pos_sin = T::zero();
    }

    /// Resets the phase and hands out exclusive use of the oscillator.
    ///
    /// Every run starts from angle 0, whatever the previous holder did.
    #[inline(always)]
    pub fn lease(&mut self) -> OscLease<'_, T> {
        self.clear_buffers();
        OscLease { osc: self }
    }
}

impl<T: FftNum> Default for TrigOscillator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of an oscillator, started at angle 0.
pub struct OscLease<'a, T> {
    osc: &'a mut TrigOscillator<T>,
}

impl<T: FftNum> OscLease<'_, T> {
    /// Advances by one step and returns the new `(cos, sin)`.
    #[inline(always)]
    pub fn next_cos_sin(&mut self) -> (T, T) {
        self.osc.step();
        (self.osc.cos(), self.osc.sin())
    }
}

#[cfg(test)]
#[path = "oscillator_tests.rs"]
mod tests;
