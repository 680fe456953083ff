// src/common.rs

use core::fmt;
use core::fmt::Debug;
use num_traits::Float;

/// Last pass whose twiddles come from the cosine table. Deeper passes use
/// one rotation oscillator each.
pub const TRIGO_BD_LIMIT: usize = 12;

/// Largest supported `log2` of the transform length.
pub const MAX_LENGTH_L2: usize = 30;

/// Largest supported transform length.
pub const MAX_LENGTH: usize = 1 << MAX_LENGTH_L2;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    NotPowerOfTwo(usize),
    LengthOutOfRange(usize),
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NotPowerOfTwo(len) => {
                write!(f, "FFT length must be a non-zero power of 2, got {len}")
            }
            FftError::LengthOutOfRange(len) => {
                write!(f, "FFT length {len} exceeds the maximum of {MAX_LENGTH}")
            }
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Buffer holds {actual} values but {expected} are required"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Sample type the engines run on.
///
/// Tables are always computed in `f64` and narrowed with [`FftNum::from_f64_lossy`].
pub trait FftNum: Float + Debug + Send + Sync + 'static {
    fn from_f64_lossy(value: f64) -> Self;
}

impl FftNum for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl FftNum for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

/// The operations a collaborator (convolution, filter design, onset
/// detection) may use on a real FFT engine.
///
/// Frequency-domain buffers use the packed layout described in
/// [`crate::spectrum`].
pub trait RealFftEngine<T> {
    /// Transform length `N`.
    fn length(&self) -> usize;

    /// Forward transform of `src` (time domain) into `dest` (packed spectrum).
    fn do_fft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError>;

    /// Inverse transform of `src` (packed spectrum) into `dest`. The result
    /// is scaled by `N`, see [`RealFftEngine::rescale`].
    fn do_ifft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError>;

    /// Divides every sample of `buf` by `N`.
    fn rescale(&self, buf: &mut [T]) -> Result<(), FftError>;

    /// Scratch storage of `N` samples. Its content is unspecified and is
    /// clobbered by the next transform call.
    fn use_buffer(&mut self) -> &mut [T];
}

/// Validates a runtime length and returns its `log2`.
pub(crate) fn length_l2(length: usize) -> Result<usize, FftError> {
    if !length.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(length));
    }
    if length > MAX_LENGTH {
        return Err(FftError::LengthOutOfRange(length));
    }
    Ok(length.trailing_zeros() as usize)
}

#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), FftError> {
    if expected != actual {
        return Err(FftError::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// `cos` and `sin` in double precision, with or without `std`.
pub(crate) fn cos_sin(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.cos(), angle.sin());

    #[cfg(not(feature = "std"))]
    return (libm::cos(angle), libm::sin(angle));
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
