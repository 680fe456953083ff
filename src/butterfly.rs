// src/butterfly.rs

//! Radix-2 passes shared by both engine flavours.
//!
//! Forward order: combined passes 1+2 (reading the input through the
//! bit-reversal table), pass 3 (constant `1/sqrt(2)` twiddles), then the
//! generic passes `3..l2` in increasing order. The inverse runs the same
//! passes backwards and scatters its output through the bit-reversal table.
//! Pass `p` combines blocks of `2^p` coefficients into blocks of `2^(p+1)`.
//!
//! Buffers ping-pong between the destination and the scratch buffer. The
//! starting buffer is picked from the parity of `l2` so that the last pass
//! always lands in the destination.

use crate::bitrev::group_indices;
use crate::common::{FftNum, TRIGO_BD_LIMIT};
use crate::trigo::table::LevelCosines;
use crate::trigo::{OscLease, TrigOscillator};
use core::f64::consts::SQRT_2;
use core::mem;

/// Where a generic pass takes its twiddles from. Every block of a pass
/// restarts at angle 0 through [`TwiddleSource::group`].
trait TwiddleSource<T> {
    type Group<'g>: TwiddleGroup<T>
    where
        Self: 'g;

    fn group(&mut self) -> Self::Group<'_>;
}

trait TwiddleGroup<T> {
    /// `(cos, sin)` of `i * PI / 2^pass`, for `i` = 1, 2, 3... in order.
    fn twiddle(&mut self, i: usize) -> (T, T);
}

impl<'a, T: FftNum> TwiddleSource<T> for LevelCosines<'a, T> {
    type Group<'g>
        = LevelCosines<'a, T>
    where
        Self: 'g;

    #[inline(always)]
    fn group(&mut self) -> Self::Group<'_> {
        *self
    }
}

impl<T: FftNum> TwiddleGroup<T> for LevelCosines<'_, T> {
    #[inline(always)]
    fn twiddle(&mut self, i: usize) -> (T, T) {
        self.get(i)
    }
}

impl<T: FftNum> TwiddleSource<T> for TrigOscillator<T> {
    type Group<'g>
        = OscLease<'g, T>
    where
        Self: 'g;

    #[inline(always)]
    fn group(&mut self) -> Self::Group<'_> {
        self.lease()
    }
}

impl<T: FftNum> TwiddleGroup<T> for OscLease<'_, T> {
    #[inline(always)]
    fn twiddle(&mut self, _i: usize) -> (T, T) {
        self.next_cos_sin()
    }
}

/// Borrowed view of an engine's tables, valid for one transform call.
pub(crate) struct ButterflyPipeline<'a, T> {
    l2: usize,
    bitrev: &'a [u32],
    cosines: &'a [T],
    oscillators: &'a mut [TrigOscillator<T>],
}

impl<'a, T: FftNum> ButterflyPipeline<'a, T> {
    pub(crate) fn new(
        l2: usize,
        bitrev: &'a [u32],
        cosines: &'a [T],
        oscillators: &'a mut [TrigOscillator<T>],
    ) -> Self {
        Self {
            l2,
            bitrev,
            cosines,
            oscillators,
        }
    }

    /// Forward transform. All three buffers hold `2^l2` values.
    pub(crate) fn forward(&mut self, dest: &mut [T], src: &[T], scratch: &mut [T]) {
        match self.l2 {
            0 => dest[0] = src[0],
            1 => {
                dest[0] = src[0] + src[1];
                dest[1] = src[0] - src[1];
            }
            2 => {
                dest[1] = src[0] - src[2];
                dest[3] = src[1] - src[3];
                let b_0 = src[0] + src[2];
                let b_2 = src[1] + src[3];
                dest[0] = b_0 + b_2;
                dest[2] = b_0 - b_2;
            }
            _ => self.forward_n_bits(dest, src, scratch),
        }
    }

    /// Inverse transform, output scaled by `2^l2`.
    pub(crate) fn inverse(&mut self, dest: &mut [T], src: &[T], scratch: &mut [T]) {
        let two = T::one() + T::one();
        match self.l2 {
            0 => dest[0] = src[0],
            1 => {
                dest[0] = src[0] + src[1];
                dest[1] = src[0] - src[1];
            }
            2 => {
                let b_0 = src[0] + src[2];
                let b_2 = src[0] - src[2];
                dest[0] = b_0 + src[1] * two;
                dest[2] = b_0 - src[1] * two;
                dest[1] = b_2 + src[3] * two;
                dest[3] = b_2 - src[3] * two;
            }
            _ => self.inverse_n_bits(dest, src, scratch),
        }
    }

    fn forward_n_bits(&mut self, dest: &mut [T], src: &[T], scratch: &mut [T]) {
        let (mut df, mut sf) = if self.l2 & 1 != 0 {
            (scratch, dest)
        } else {
            (dest, scratch)
        };

        direct_pass_1_2(df, src, self.bitrev);
        direct_pass_3(sf, df);

        for pass in 3..self.l2 {
            if pass <= TRIGO_BD_LIMIT {
                let mut cosines = LevelCosines::new(self.cosines, pass);
                direct_pass_n(df, sf, pass, &mut cosines);
            } else {
                let osc = &mut self.oscillators[pass - (TRIGO_BD_LIMIT + 1)];
                direct_pass_n(df, sf, pass, osc);
            }
            mem::swap(&mut df, &mut sf);
        }
    }

    fn inverse_n_bits(&mut self, dest: &mut [T], src: &[T], scratch: &mut [T]) {
        let (mut df, mut sf) = if self.l2 & 1 != 0 {
            (scratch, dest)
        } else {
            (dest, scratch)
        };

        let mut pass = self.l2 - 1;
        if pass >= 3 {
            self.inverse_pass_n(df, src, pass);
            mem::swap(&mut df, &mut sf);
            pass -= 1;
            while pass >= 3 {
                self.inverse_pass_n(df, sf, pass);
                mem::swap(&mut df, &mut sf);
                pass -= 1;
            }
            inverse_pass_3(df, sf);
        } else {
            inverse_pass_3(df, src);
        }

        // `df` is the scratch buffer here, `sf` the destination.
        inverse_pass_1_2(sf, df, self.bitrev);
    }

    fn inverse_pass_n(&mut self, df: &mut [T], sf: &[T], pass: usize) {
        if pass <= TRIGO_BD_LIMIT {
            let mut cosines = LevelCosines::new(self.cosines, pass);
            inverse_pass_n(df, sf, pass, &mut cosines);
        } else {
            let osc = &mut self.oscillators[pass - (TRIGO_BD_LIMIT + 1)];
            inverse_pass_n(df, sf, pass, osc);
        }
    }
}

/// Divides every sample by `2^l2`. The factor is built by `l2` halvings,
/// each of them exact.
pub(crate) fn rescale<T: FftNum>(buf: &mut [T], l2: usize) {
    let half = T::from_f64_lossy(0.5);
    let mut mul = T::one();
    for _ in 0..l2 {
        mul = mul * half;
    }
    for x in buf.iter_mut() {
        *x = *x * mul;
    }
}

fn direct_pass_1_2<T: FftNum>(df: &mut [T], x: &[T], bitrev: &[u32]) {
    let quarter = df.len() >> 2;
    for (group, d) in df.chunks_exact_mut(4).enumerate() {
        let [ri_0, ri_1, ri_2, ri_3] = group_indices(bitrev, group, quarter);

        d[1] = x[ri_0] - x[ri_1];
        d[3] = x[ri_2] - x[ri_3];

        let sf_0 = x[ri_0] + x[ri_1];
        let sf_2 = x[ri_2] + x[ri_3];

        d[0] = sf_0 + sf_2;
        d[2] = sf_0 - sf_2;
    }
}

fn direct_pass_3<T: FftNum>(df: &mut [T], sf: &[T]) {
    let sqrt2_2 = T::from_f64_lossy(SQRT_2 * 0.5);
    for (d, s) in df.chunks_exact_mut(8).zip(sf.chunks_exact(8)) {
        d[0] = s[0] + s[4];
        d[4] = s[0] - s[4];
        d[2] = s[2];
        d[6] = s[6];

        let v = (s[5] - s[7]) * sqrt2_2;
        d[1] = s[1] + v;
        d[3] = s[1] - v;

        let v = (s[5] + s[7]) * sqrt2_2;
        d[5] = v + s[3];
        d[7] = v - s[3];
    }
}

fn direct_pass_n<T: FftNum, W: TwiddleSource<T>>(
    df: &mut [T],
    sf: &[T],
    pass: usize,
    twiddles: &mut W,
) {
    let nbr_coef = 1 << pass;
    let h_nbr_coef = nbr_coef >> 1;
    let d_nbr_coef = nbr_coef << 1;

    for (d, s) in df.chunks_exact_mut(d_nbr_coef).zip(sf.chunks_exact(d_nbr_coef)) {
        let (sf1, sf2) = s.split_at(nbr_coef);

        // Extreme coefficients are always real
        d[0] = sf1[0] + sf2[0];
        d[nbr_coef] = sf1[0] - sf2[0];
        d[h_nbr_coef] = sf1[h_nbr_coef];
        d[nbr_coef + h_nbr_coef] = sf2[h_nbr_coef];

        // Others are conjugate complex numbers
        let mut group = twiddles.group();
        for i in 1..h_nbr_coef {
            let (c, sn) = group.twiddle(i);
            let sf1r = sf1[i];
            let sf1i = sf1[h_nbr_coef + i];
            let sf2r = sf2[i];
            let sf2i = sf2[h_nbr_coef + i];

            let v = sf2r * c - sf2i * sn;
            d[i] = sf1r + v;
            d[nbr_coef - i] = sf1r - v;

            let v = sf2r * sn + sf2i * c;
            d[nbr_coef + i] = v + sf1i;
            d[d_nbr_coef - i] = v - sf1i;
        }
    }
}

fn inverse_pass_n<T: FftNum, W: TwiddleSource<T>>(
    df: &mut [T],
    sf: &[T],
    pass: usize,
    twiddles: &mut W,
) {
    let two = T::one() + T::one();
    let nbr_coef = 1 << pass;
    let h_nbr_coef = nbr_coef >> 1;
    let d_nbr_coef = nbr_coef << 1;

    for (d, s) in df.chunks_exact_mut(d_nbr_coef).zip(sf.chunks_exact(d_nbr_coef)) {
        let (df1, df2) = d.split_at_mut(nbr_coef);

        // Extreme coefficients are always real
        df1[0] = s[0] + s[nbr_coef];
        df2[0] = s[0] - s[nbr_coef];
        df1[h_nbr_coef] = s[h_nbr_coef] * two;
        df2[h_nbr_coef] = s[nbr_coef + h_nbr_coef] * two;

        // Others are conjugate complex numbers
        let mut group = twiddles.group();
        for i in 1..h_nbr_coef {
            let sfr = s[i];
            let sfr_mirror = s[nbr_coef - i];
            let sfi = s[nbr_coef + i];
            let sfi_mirror = s[d_nbr_coef - i];

            df1[i] = sfr + sfr_mirror;
            df1[h_nbr_coef + i] = sfi - sfi_mirror;

            let (c, sn) = group.twiddle(i);
            let vr = sfr - sfr_mirror;
            let vi = sfi + sfi_mirror;

            df2[i] = vr * c + vi * sn;
            df2[h_nbr_coef + i] = vi * c - vr * sn;
        }
    }
}

fn inverse_pass_3<T: FftNum>(df: &mut [T], sf: &[T]) {
    let two = T::one() + T::one();
    let sqrt2_2 = T::from_f64_lossy(SQRT_2 * 0.5);
    for (d, s) in df.chunks_exact_mut(8).zip(sf.chunks_exact(8)) {
        d[0] = s[0] + s[4];
        d[4] = s[0] - s[4];
        d[2] = s[2] * two;
        d[6] = s[6] * two;

        d[1] = s[1] + s[3];
        d[3] = s[5] - s[7];

        let vr = s[1] - s[3];
        let vi = s[5] + s[7];

        d[5] = (vr + vi) * sqrt2_2;
        d[7] = (vi - vr) * sqrt2_2;
    }
}

fn inverse_pass_1_2<T: FftNum>(x: &mut [T], sf: &[T], bitrev: &[u32]) {
    let two = T::one() + T::one();
    let quarter = x.len() >> 2;
    for (group, s) in sf.chunks_exact(4).enumerate() {
        let [ri_0, ri_1, ri_2, ri_3] = group_indices(bitrev, group, quarter);

        let b_0 = s[0] + s[2];
        let b_2 = s[0] - s[2];
        let b_1 = s[1] * two;
        let b_3 = s[3] * two;

        x[ri_0] = b_0 + b_1;
        x[ri_1] = b_0 - b_1;
        x[ri_2] = b_2 + b_3;
        x[ri_3] = b_2 - b_3;
    }
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
