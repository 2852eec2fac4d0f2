// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integers and floats derived from raw engine output
//!
//! Every function here consumes a number of raw words which depends only on
//! its arguments and on the values drawn, never on the platform. Integer
//! results are therefore bit-for-bit reproducible. Float results consume a
//! fixed number of words (see [`random`]).
//!
//! Ranged integers use rejection sampling on a power-of-two mask: a value of
//! `bit_length(n)` bits is drawn and discarded if it is `n` or larger, so
//! fewer than two draws are needed on average.

use crate::error::Error;
use crate::pcg::RawSource;

/// Scale of the 53 mantissa bits drawn by [`random`]: 2<sup>-53</sup>.
const FLOAT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Concatenate enough raw words for `k` bits and keep the top `k`.
///
/// Requires `0 < k <= 128`.
#[inline]
pub(crate) fn top_bits<R: RawSource + ?Sized>(rng: &mut R, k: u32) -> u128 {
    let word_bits = rng.output_bits();
    let words = (k + word_bits - 1) / word_bits;
    let mut acc = 0u128;
    for _ in 0..words {
        acc = (acc << word_bits) | u128::from(rng.next_raw());
    }
    acc >> (words * word_bits - k)
}

/// Return an integer with `k` random bits.
///
/// Raw words are concatenated most significant first, `ceil(k / w)` of them
/// for output width `w`, and the top `k` bits kept. `getrandbits(0)` returns
/// 0 without consuming any output.
///
/// # Errors
///
/// [`ErrorKind::InvalidArgument`] if `k > 128`.
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
pub fn getrandbits<R: RawSource + ?Sized>(rng: &mut R, k: u32) -> Result<u128, Error> {
    match k {
        0 => Ok(0),
        1..=128 => Ok(top_bits(rng, k)),
        _ => Err(Error::invalid_argument("getrandbits: k must be at most 128")),
    }
}

/// Return a uniformly distributed integer in `[0, n)`.
///
/// # Errors
///
/// [`ErrorKind::InvalidArgument`] if `n == 0`.
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
pub fn randbelow<R: RawSource + ?Sized>(rng: &mut R, n: u128) -> Result<u128, Error> {
    if n == 0 {
        return Err(Error::invalid_argument("randbelow: empty range"));
    }
    Ok(below(rng, n))
}

/// [`randbelow`] for a bound already known to be non-zero.
pub(crate) fn below<R: RawSource + ?Sized>(rng: &mut R, n: u128) -> u128 {
    debug_assert!(n > 0);
    let k = u128::BITS - n.leading_zeros();
    loop {
        let r = top_bits(rng, k);
        if r < n {
            return r;
        }
        trace!("randbelow: rejected {} for bound {}", r, n);
    }
}

/// Uniform index in `[0, ubound)`; `ubound` must be non-zero.
#[inline]
pub(crate) fn gen_index<R: RawSource + ?Sized>(rng: &mut R, ubound: usize) -> usize {
    below(rng, ubound as u128) as usize
}

/// Return a uniformly chosen element of `range(start, stop, step)`.
///
/// With `stop == None` the range is `[0, start)` and `step` is ignored.
/// Negative steps count down from `start` towards `stop` (exclusive).
/// Any non-empty progression of `i128` values is accepted, however wide.
///
/// # Errors
///
/// [`ErrorKind::InvalidArgument`] if the progression is empty or `step` is
/// zero.
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
pub fn randrange<R: RawSource + ?Sized>(
    rng: &mut R, start: i128, stop: Option<i128>, step: i128,
) -> Result<i128, Error> {
    let stop = match stop {
        Some(stop) => stop,
        None if start > 0 => return Ok(randbelow(rng, start as u128)? as i128),
        None => return Err(Error::invalid_argument("randrange: empty range")),
    };

    if step == 0 {
        return Err(Error::invalid_argument("randrange: zero step"));
    }
    // distance from start to stop in the direction of step; it fits in a
    // u128 for any pair of i128 values
    let width = match step > 0 {
        true if start < stop => (stop as u128).wrapping_sub(start as u128),
        false if stop < start => (start as u128).wrapping_sub(stop as u128),
        _ => return Err(Error::invalid_argument("randrange: empty range")),
    };
    let stride = step.unsigned_abs();
    let n = width / stride + u128::from(width % stride != 0);
    let r = randbelow(rng, n)?;
    // start + step * r lies between start and stop, so wrapping is exact
    Ok(start.wrapping_add(step.wrapping_mul(r as i128)))
}

/// Return a uniformly distributed integer in `[a, b]`, both ends included.
///
/// # Errors
///
/// [`ErrorKind::InvalidArgument`] if `b < a`, or if the range covers every
/// `i128` (it then has 2<sup>128</sup> elements).
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
pub fn randint<R: RawSource + ?Sized>(rng: &mut R, a: i128, b: i128) -> Result<i128, Error> {
    if b < a {
        return Err(Error::invalid_argument("randint: empty range"));
    }
    let span = (b as u128).wrapping_sub(a as u128).wrapping_add(1);
    if span == 0 {
        return Err(Error::invalid_argument("randint: range too wide"));
    }
    let r = randbelow(rng, span)?;
    Ok(a.wrapping_add(r as i128))
}

/// Return a float in `[0, 1)` built from 53 random bits.
///
/// Always consumes two raw words on 32-bit-output engines and one on
/// 64-bit-output engines.
#[inline]
pub fn random<R: RawSource + ?Sized>(rng: &mut R) -> f64 {
    top_bits(rng, 53) as f64 * FLOAT_SCALE
}

/// Return `a + (b - a) * random()`.
///
/// The result lies between `a` and `b`; whether `b` itself can occur
/// depends on floating-point rounding. Consumes the same output as
/// [`random`].
#[inline]
pub fn uniform<R: RawSource + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * random(rng)
}
