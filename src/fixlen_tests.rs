use super::*;
use crate::FftReal;
use std::boxed::Box;
use std::vec;
use std::vec::Vec;

fn signal(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i.wrapping_mul(2654435761) >> 7) % 1000) as f32 / 500.0 - 1.0)
        .collect()
}

/// Runs forward and inverse on both flavours and compares bit patterns.
fn assert_same_bits_as_variable<const LL2: usize>()
where
    Ll2<LL2>: FixedLength,
{
    let n = 1 << LL2;
    let x = signal(n);
    let mut fixed = Box::new(FftRealFixLen::<f32, LL2>::new());
    let mut variable = FftReal::<f32>::new(n).unwrap();

    let mut spec_fixed = vec![0.0; n];
    let mut spec_variable = vec![0.0; n];
    fixed.do_fft(&mut spec_fixed, &x).unwrap();
    variable.do_fft(&mut spec_variable, &x).unwrap();
    assert!(
        spec_fixed.iter().zip(spec_variable.iter()).all(|(a, b)| a.to_bits() == b.to_bits()),
        "forward differs for LL2 = {LL2}"
    );

    let mut back_fixed = vec![0.0; n];
    let mut back_variable = vec![0.0; n];
    fixed.do_ifft(&mut back_fixed, &spec_fixed).unwrap();
    variable.do_ifft(&mut back_variable, &spec_variable).unwrap();
    fixed.rescale(&mut back_fixed).unwrap();
    variable.rescale(&mut back_variable).unwrap();
    assert!(
        back_fixed.iter().zip(back_variable.iter()).all(|(a, b)| a.to_bits() == b.to_bits()),
        "inverse differs for LL2 = {LL2}"
    );
}

#[test]
fn test_storage_sizes() {
    assert_eq!(<Ll2<0> as FixedLength>::samples::<f32>().len(), 1);
    assert_eq!(<Ll2<2> as FixedLength>::bitrev().len(), 1);
    assert_eq!(<Ll2<10> as FixedLength>::bitrev().len(), 256);
    assert_eq!(<Ll2<3> as FixedLength>::cosines::<f32>().len(), 0);
    assert_eq!(<Ll2<5> as FixedLength>::cosines::<f64>().len(), 12);
    assert_eq!(<Ll2<13> as FixedLength>::oscillators::<f32>().len(), 0);
    assert_eq!(<Ll2<15> as FixedLength>::oscillators::<f32>().len(), 2);
    assert_eq!(<Ll2<30> as FixedLength>::LL2, 30);
}

#[test]
fn test_length() {
    let fft = FftRealFixLen::<f64, 6>::new();
    assert_eq!(fft.length(), 64);
    assert_eq!(FftRealFixLen::<f64, 6>::LENGTH, 64);
}

#[test]
fn test_identity_length_one() {
    let mut fft = FftRealFixLen::<f32, 0>::default();
    let mut out = [0.0];
    fft.do_fft(&mut out, &[2.5]).unwrap();
    assert_eq!(out, [2.5]);
    fft.do_ifft(&mut out, &[2.5]).unwrap();
    assert_eq!(out, [2.5]);
}

#[test]
fn test_impulse_8() {
    let mut fft = FftRealFixLen::<f32, 3>::new();
    let mut out = [0.0; 8];
    fft.do_fft(&mut out, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    let expected = [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
    for (&val, &exp) in out.iter().zip(expected.iter()) {
        assert!((val - exp).abs() < 1e-6, "Expected: {}, Got: {}", exp, val);
    }
}

#[test]
fn test_dc_and_nyquist_4() {
    let mut fft = FftRealFixLen::<f32, 2>::new();
    let mut out = [0.0; 4];
    fft.do_fft(&mut out, &[1.0, 1.0, 1.0, 1.0]).unwrap();
    assert_eq!(out, [4.0, 0.0, 0.0, 0.0]);
    fft.do_fft(&mut out, &[1.0, -1.0, 1.0, -1.0]).unwrap();
    assert_eq!(out, [0.0, 0.0, 4.0, 0.0]);
}

#[test]
fn test_roundtrip_64() {
    let mut fft = FftRealFixLen::<f64, 6>::new();
    let x: Vec<f64> = signal(64).into_iter().map(f64::from).collect();
    let mut spectrum = [0.0; 64];
    let mut back = [0.0; 64];
    fft.do_fft(&mut spectrum, &x).unwrap();
    fft.do_ifft(&mut back, &spectrum).unwrap();
    fft.rescale(&mut back).unwrap();
    for (&a, &b) in x.iter().zip(back.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_size_mismatch() {
    let mut fft = FftRealFixLen::<f32, 4>::new();
    let mut out = [0.0; 8];
    assert_eq!(
        fft.do_fft(&mut out, &[0.0; 16]),
        Err(FftError::SizeMismatch {
            expected: 16,
            actual: 8
        })
    );
}

#[test]
fn test_use_buffer() {
    let mut fft = FftRealFixLen::<f32, 7>::new();
    assert_eq!(fft.use_buffer().len(), 128);
}

#[test]
fn test_same_bits_as_variable_length() {
    assert_same_bits_as_variable::<0>();
    assert_same_bits_as_variable::<1>();
    assert_same_bits_as_variable::<2>();
    assert_same_bits_as_variable::<3>();
    assert_same_bits_as_variable::<4>();
    assert_same_bits_as_variable::<5>();
    assert_same_bits_as_variable::<9>();
    assert_same_bits_as_variable::<13>();
    assert_same_bits_as_variable::<14>();
    assert_same_bits_as_variable::<15>();
}

#[test]
fn test_generic_over_engine() {
    fn roundtrip<E: RealFftEngine<f32>>(engine: &mut E, x: &[f32]) -> Vec<f32> {
        let mut spectrum = vec![0.0; engine.length()];
        let mut back = vec![0.0; engine.length()];
        engine.do_fft(&mut spectrum, x).unwrap();
        engine.do_ifft(&mut back, &spectrum).unwrap();
        engine.rescale(&mut back).unwrap();
        back
    }

    let x = signal(32);
    let a = roundtrip(&mut FftRealFixLen::<f32, 5>::new(), &x);
    let b = roundtrip(&mut FftReal::<f32>::new(32).unwrap(), &x);
    assert_eq!(a, b);
}
