// src/fixlen.rs

//! Real FFT with a length fixed at compile time.
//!
//! Every table lives inline in the engine, sized from `LL2` through
//! [`FixedLength`]. Nothing is allocated, so an engine can sit in a
//! `static` or on the stack. Large engines (`LL2` past ~16) are better
//! boxed to keep them off small thread stacks.

use crate::bitrev::{self, precompute_bitrev};
use crate::butterfly::{self, ButterflyPipeline};
use crate::common::{FftError, FftNum, RealFftEngine, check_len};
use crate::trigo::{self, TrigOscillator, table};

/// Type-level `log2` of a transform length.
pub struct Ll2<const LL2: usize>;

mod sealed {
    pub trait Sealed {}
}

/// Storage layout of a fixed-length engine. Implemented for
/// [`Ll2<0>`](Ll2) to [`Ll2<30>`](Ll2) only.
pub trait FixedLength: sealed::Sealed {
    const LL2: usize;

    type Samples<T: FftNum>: AsRef<[T]> + AsMut<[T]>;
    type BitRev: AsRef<[u32]> + AsMut<[u32]>;
    type Cosines<T: FftNum>: AsRef<[T]> + AsMut<[T]>;
    type Oscillators<T: FftNum>: AsRef<[TrigOscillator<T>]> + AsMut<[TrigOscillator<T>]>;

    fn samples<T: FftNum>() -> Self::Samples<T>;
    fn bitrev() -> Self::BitRev;
    fn cosines<T: FftNum>() -> Self::Cosines<T>;
    fn oscillators<T: FftNum>() -> Self::Oscillators<T>;
}

macro_rules! impl_fixed_length {
    ($($ll2:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for Ll2<$ll2> {}

            impl FixedLength for Ll2<$ll2> {
                const LL2: usize = $ll2;

                type Samples<T: FftNum> = [T; 1 << $ll2];
                type BitRev = [u32; bitrev::table_len($ll2)];
                type Cosines<T: FftNum> = [T; table::table_len($ll2)];
                type Oscillators<T: FftNum> = [TrigOscillator<T>; trigo::oscillator_count($ll2)];

                #[inline]
                fn samples<T: FftNum>() -> Self::Samples<T> {
                    [T::zero(); 1 << $ll2]
                }

                #[inline]
                fn bitrev() -> Self::BitRev {
                    [0; bitrev::table_len($ll2)]
                }

                #[inline]
                fn cosines<T: FftNum>() -> Self::Cosines<T> {
                    [T::zero(); table::table_len($ll2)]
                }

                #[inline]
                fn oscillators<T: FftNum>() -> Self::Oscillators<T> {
                    [TrigOscillator::new(); trigo::oscillator_count($ll2)]
                }
            }
        )*
    };
}

impl_fixed_length!(
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30,
);

/// Real FFT of `2^LL2` samples.
///
/// Produces the same bits as [`FftReal`](crate::FftReal) for the same
/// length and sample type.
///
/// ```
/// use fftreal::FftRealFixLen;
///
/// let mut fft = FftRealFixLen::<f32, 2>::new();
/// let mut spectrum = [0.0; 4];
/// fft.do_fft(&mut spectrum, &[1.0, 1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(spectrum, [4.0, 0.0, 0.0, 0.0]);
/// ```
///
/// Lengths past `2^30` do not compile:
///
/// ```compile_fail
/// let fft = fftreal::FftRealFixLen::<f32, 31>::new();
/// ```
pub struct FftRealFixLen<T: FftNum, const LL2: usize>
where
    Ll2<LL2>: FixedLength,
{
    buffer: <Ll2<LL2> as FixedLength>::Samples<T>,
    bitrev: <Ll2<LL2> as FixedLength>::BitRev,
    cosines: <Ll2<LL2> as FixedLength>::Cosines<T>,
    oscillators: <Ll2<LL2> as FixedLength>::Oscillators<T>,
}

impl<T: FftNum, const LL2: usize> FftRealFixLen<T, LL2>
where
    Ll2<LL2>: FixedLength,
{
    pub const LENGTH: usize = 1 << LL2;

    pub fn new() -> Self {
        let mut fft = Self {
            buffer: Ll2::<LL2>::samples(),
            bitrev: Ll2::<LL2>::bitrev(),
            cosines: Ll2::<LL2>::cosines(),
            oscillators: Ll2::<LL2>::oscillators(),
        };

        precompute_bitrev(fft.bitrev.as_mut(), LL2);
        table::precompute_cosines(fft.cosines.as_mut(), LL2);
        trigo::setup_oscillators(fft.oscillators.as_mut());

        tracing::trace!(length = Self::LENGTH, "fixed-length real FFT built");
        fft
    }

    #[inline]
    pub fn length(&self) -> usize {
        Self::LENGTH
    }

    /// Forward transform, see [`FftReal::do_fft`](crate::FftReal::do_fft).
    pub fn do_fft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        check_len(Self::LENGTH, dest.len())?;
        check_len(Self::LENGTH, src.len())?;

        ButterflyPipeline::new(
            LL2,
            self.bitrev.as_ref(),
            self.cosines.as_ref(),
            self.oscillators.as_mut(),
        )
        .forward(dest, src, self.buffer.as_mut());
        Ok(())
    }

    /// Inverse transform, scaled by `N`.
    pub fn do_ifft(&mut self, dest: &mut [T], src: &[T]) -> Result<(), FftError> {
        check_len(Self::LENGTH, dest.len())?;
        check_len(Self::LENGTH, src.len())?;

        ButterflyPipeline::new(
            LL2,
            self.bitrev.as_ref(),
            self.cosines.as_ref(),
            self.oscillators.as_mut(),
        )
        .inverse(dest, src, self.buffer.as_mut());
        Ok(())
    }

    pub fn rescale(&self, buf: &mut [T]) -> Result<(), FftError> {
        check_len(Self::LENGTH, buf.len())?;
        butterfly::rescale(buf, LL2);
        Ok(())
    }

    #[inline]
    pub fn use_buffer(&mut self) -> &mut [T] {
        self.buffer.as_mut()
    }
}

impl<T: FftNum, const LL2: usize> Default for FftRealFixLen<T, LL2>
where
    Ll2<LL2>: FixedLength,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FftNum, const LL2: usize> RealFftEngine<T> for FftRealFixLen<T, LL2>
where
    Ll2<LL2>: FixedLength,
{
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
#[path = "fixlen_tests.rs"]
mod tests;
