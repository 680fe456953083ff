#![no_std]

//! Fixed-size real FFT.
//!
//! [`FftReal`] picks its length at runtime and allocates its tables once.
//! [`FftRealFixLen`] fixes the length at compile time and keeps every table
//! inline. Both produce the packed spectrum described in [`spectrum`].

extern crate alloc;

// Tests always run on the host; the error impl and `f64::cos` need `std`
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixlen;
pub mod real;
pub mod spectrum;
pub mod trigo;

mod bitrev;
mod butterfly;

pub use common::{FftError, FftNum, MAX_LENGTH, MAX_LENGTH_L2, RealFftEngine, TRIGO_BD_LIMIT};
pub use fixlen::{FftRealFixLen, FixedLength, Ll2};
pub use real::FftReal;
pub use spectrum::{bin_count, pack_spectrum, unpack_spectrum};
pub use trigo::{OscLease, TrigOscillator};
