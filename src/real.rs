// src/real.rs

use crate::bitrev::{self, precompute_bitrev};
use crate::butterfly::{self, ButterflyPipeline};
use crate::common::{FftError, FftNum, RealFftEngine, check_len, length_l2};
use crate::trigo::{self, TrigOscillator, table};
use alloc::vec;
use alloc::vec::Vec;

/// Real FFT with a length chosen at runtime.
///
/// Tables and the scratch buffer are allocated by [`FftReal::new`] and
/// [`FftReal::set_length`] only; transforms never allocate.
pub struct FftReal<T> {
    length: usize,
    l2: usize,
    bitrev: Vec<u32>,
    cosines: Vec<T>,
    oscillators: Vec<TrigOscillator<T>>,
    buffer: Vec<T>,
}

impl<T: FftNum> FftReal<T> {
    /// Builds an engine for `length` samples, a power of 2 in `1..=2^30`.
    pub fn new(length: usize) -> Result<Self, FftError> {
        let mut fft = Self {
            length: 0,
            l2: 0,
            bitrev: Vec::new(),
            cosines: Vec::new(),
            oscillators: Vec::new(),
            buffer: Vec::new(),
        };
        fft.set_length(length)?;
        Ok(fft)
    }

    /// Changes the transform length and rebuilds every table.
    ///
    /// On error the engine keeps its previous length and tables.
    pub fn set_length(&mut self, length: usize) -> Result<(), FftError> {
        let l2 = length_l2(length).inspect_err(|err| {
            tracing::warn!(length, %err, "rejected real FFT length");
        })?;

        self.length = length;
        self.l2 = l2;
        self.precompute();

        tracing::debug!(
            length,
            bitrev = self.bitrev.len(),
            cosines = self.cosines.len(),
            oscillators = self.oscillators.len(),
            "real FFT tables built"
        );
        Ok(())
    }

    fn precompute(&mut self) {
        self.bitrev = vec![0; bitrev::table_len(self.l2)];
        precompute_bitrev(&mut self.bitrev, self.l2);

        self.cosines = vec![T::zero(); table::table_len(self.l2)];
        table::precompute_cosines(&mut self.cosines, self.l2);

        self.oscillators = vec![TrigOscillator::new(); trigo::oscillator_count(self.l2)];
        trigo::setup_oscillators(&mut self.oscillators);

        self.buffer = vec![T::zero(); self.length];
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// `log2` of the transform length.
    #[inline]
    pub fn length_l2(&self) -> usize {
        self.l2
    }

    /// Forward transform.
    ///
    /// `src` holds `N` time-domain samples; `dest` receives the packed
    /// spectrum (see [`crate::spectrum`]).
    pub fn do_fft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        check_len(self.length, dest.len())?;
        check_len(self.length, src.len())?;

        ButterflyPipeline::new(self.l2, &self.bitrev, &self.cosines, &mut self.oscillators)
            .forward(dest, src, &mut self.buffer);
        Ok(())
    }

    /// Inverse transform of a packed spectrum. The output is scaled by `N`;
    /// call [`FftReal::rescale`] to undo it.
    pub fn do_ifft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        check_len(self.length, dest.len())?;
        check_len(self.length, src.len())?;

        ButterflyPipeline::new(self.l2, &self.bitrev, &self.cosines, &mut self.oscillators)
            .inverse(dest, src, &mut self.buffer);
        Ok(())
    }

    /// Divides every sample of `buf` by `N`.
    pub fn rescale(&self, buf: &mut [T]) -> Result<(), FftError> {
        check_len(self.length, buf.len())?;
        butterfly::rescale(buf, self.l2);
        Ok(())
    }

    /// Internal scratch buffer of `N` samples, free for use between two
    /// transform calls.
    #[inline]
    pub fn use_buffer(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T: FftNum> RealFftEngine<T> for FftReal<T> {
    fn length(&self) -> usize {
        self.length()
    }

    fn do_fft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        self.do_fft(dest, src)
    }

    fn do_ifft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        self.do_ifft(dest, src)
    }

    fn rescale(&self, buf: &mut [T]) -> Result<(), FftError> {
        self.rescale(buf)
    }

    fn use_buffer(&mut self) -> &mut [T] {
        self.use_buffer()
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
