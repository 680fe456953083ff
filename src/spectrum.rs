// src/spectrum.rs

//! Packed layout of a real spectrum.
//!
//! A forward transform of `N` real samples yields `N/2 + 1` complex bins
//! `X[k] = sum x[n] e^(-2 pi i k n / N)`, stored in `N` reals:
//!
//! - `f[0]`: `Re X[0]` (DC, no imaginary part)
//! - `f[k]`, `1 <= k < N/2`: `Re X[k]`
//! - `f[N/2]`: `Re X[N/2]` (Nyquist, no imaginary part), for `N >= 2`
//! - `f[N/2 + k]`, `1 <= k < N/2`: `-Im X[k]`
//!
//! The inverse transform reads the same layout.

use crate::common::{FftError, FftNum, check_len, length_l2};
use num_complex::Complex;

/// Number of complex bins held by a packed spectrum of `length` reals.
#[inline]
pub fn bin_count(length: usize) -> usize {
    length / 2 + 1
}

/// Expands a packed spectrum into `N/2 + 1` complex bins.
///
/// `packed` must hold a supported transform length; `N = 1` gives a single
/// DC bin.
pub fn unpack_spectrum<T: FftNum>(packed: &[T], bins: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = packed.len();
    length_l2(n)?;
    check_len(bin_count(n), bins.len())?;

    let half = n / 2;
    bins[0] = Complex::new(packed[0], T::zero());
    for k in 1..half {
        bins[k] = Complex::new(packed[k], -packed[half + k]);
    }
    if n >= 2 {
        bins[half] = Complex::new(packed[half], T::zero());
    }
    Ok(())
}

/// Packs `N/2 + 1` complex bins into `packed`.
///
/// The imaginary parts of the DC and Nyquist bins are dropped.
pub fn pack_spectrum<T: FftNum>(bins: &[Complex<T>], packed: &mut [T]) -> Result<(), FftError> {
    let n = packed.len();
    length_l2(n)?;
    check_len(bin_count(n), bins.len())?;

    let half = n / 2;
    packed[0] = bins[0].re;
    for k in 1..half {
        packed[k] = bins[k].re;
        packed[half + k] = -bins[k].im;
    }
    if n >= 2 {
        packed[half] = bins[half].re;
    }
    Ok(())
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
