// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017, 2019 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The linear congruential generator underlying every PCG engine.

use crate::error::{Error, ErrorKind};
use core::fmt;

mod private {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
}

/// An unsigned state word; all arithmetic wraps modulo 2<sup>BITS</sup>.
pub trait LcgWord: Copy + Eq + fmt::Debug + private::Sealed {
    /// Width of the word in bits.
    const BITS: u32;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;

    /// Addition modulo 2<sup>BITS</sup>.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Multiplication modulo 2<sup>BITS</sup>.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Negation modulo 2<sup>BITS</sup>.
    fn wrapping_neg(self) -> Self;
    /// Reduce a 128-bit value modulo 2<sup>BITS</sup>.
    fn truncate(x: u128) -> Self;
    /// Zero-extend to 128 bits.
    fn widen(self) -> u128;
}

macro_rules! impl_lcg_word {
    ($($ty:ty),*) => {$(
        impl LcgWord for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }
            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$ty>::wrapping_neg(self)
            }
            #[inline(always)]
            fn truncate(x: u128) -> Self {
                x as $ty
            }
            #[inline(always)]
            fn widen(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_lcg_word!(u64, u128);

/// Increment selected by a sequence number: `2 * sequence + 1`, which is
/// always odd.
#[inline]
pub fn increment_for_sequence<W: LcgWord>(sequence: u128) -> W {
    W::truncate((sequence << 1) | 1)
}

/// Check that `multiplier` is of the form `4k + 1`.
///
/// Together with an odd increment this gives the LCG its full period of
/// 2<sup>BITS</sup>.
pub fn check_multiplier<W: LcgWord>(multiplier: W) -> Result<(), Error> {
    if multiplier.widen() & 3 == 1 {
        Ok(())
    } else {
        Err(Error::invalid_argument("LCG multiplier must be of the form 4k+1"))
    }
}

/// Multiplicative inverse of an odd `a` modulo 2<sup>BITS</sup>.
///
/// Newton's iteration `x = x * (2 - a * x)` doubles the number of correct low
/// bits each round; `x = a` is already correct to three bits since
/// `a * a = 1 (mod 8)` for every odd `a`.
fn inverse<W: LcgWord>(a: W) -> W {
    let two = W::ONE.wrapping_add(W::ONE);
    let mut x = a;
    let mut correct_bits = 3;
    while correct_bits < W::BITS {
        x = x.wrapping_mul(two.wrapping_add(a.wrapping_mul(x).wrapping_neg()));
        correct_bits *= 2;
    }
    x
}

/// The affine map `(mult, plus)` applied `delta` times, as a single
/// `(mult, plus)` pair.
///
/// The method is based on Brown, "Random Number Generation with Arbitrary
/// Stride", Transactions of the American Nuclear Society (Nov. 1994), and is
/// very similar to fast exponentiation: bits of `delta` are consumed from the
/// least significant end while the current map is squared.
fn compose<W: LcgWord>(mult: W, plus: W, delta: u128) -> (W, W) {
    let mut acc_mult = W::ONE;
    let mut acc_plus = W::ZERO;
    let mut cur_mult = mult;
    let mut cur_plus = plus;
    let mut mdelta = delta;

    while mdelta > 0 {
        if (mdelta & 1) != 0 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(W::ONE).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        mdelta >>= 1;
    }
    (acc_mult, acc_plus)
}

/// LCG state `state' = state * multiplier + increment (mod 2^W)`.
///
/// Invariants: `increment` is odd and `multiplier = 1 (mod 4)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg<W> {
    state: W,
    increment: W,
    multiplier: W,
}

impl<W: LcgWord> Lcg<W> {
    /// An LCG at state zero. `increment` must be odd and `multiplier` must
    /// have passed [`check_multiplier`].
    pub fn new(multiplier: W, increment: W) -> Self {
        debug_assert!(increment.widen() & 1 == 1);
        debug_assert!(check_multiplier(multiplier).is_ok());
        Lcg {
            state: W::ZERO,
            increment,
            multiplier,
        }
    }

    /// Rebuild from raw parts, validating the invariants.
    pub fn from_parts(multiplier: u128, increment: u128, state: u128) -> Result<Self, Error> {
        let fits = |x: u128| W::truncate(x).widen() == x;
        if !(fits(multiplier) && fits(increment) && fits(state)) {
            return Err(Error::new(
                ErrorKind::InvalidState,
                "state word wider than the generator state",
            ));
        }
        if increment & 1 != 1 {
            return Err(Error::new(ErrorKind::InvalidState, "LCG increment must be odd"));
        }
        if multiplier & 3 != 1 {
            return Err(Error::new(
                ErrorKind::InvalidState,
                "LCG multiplier must be of the form 4k+1",
            ));
        }
        Ok(Lcg {
            state: W::truncate(state),
            increment: W::truncate(increment),
            multiplier: W::truncate(multiplier),
        })
    }

    /// Seed the way the PCG reference implementation does: from state zero,
    /// step once, add the seed, step once more.
    pub fn bootstrap(&mut self, seed: W) {
        self.state = W::ZERO;
        self.step();
        self.state = self.state.wrapping_add(seed);
        self.step();
    }

    #[inline(always)]
    pub fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.increment);
    }

    /// Equivalent to calling [`Lcg::step`] `delta` times, modulo the period.
    pub fn advance(&mut self, delta: u128) {
        let delta = W::truncate(delta).widen();
        let (mult, plus) = compose(self.multiplier, self.increment, delta);
        self.state = mult.wrapping_mul(self.state).wrapping_add(plus);
    }

    /// Undo `delta` steps.
    ///
    /// The inverse of one step is `state = (state' - increment) * a⁻¹`,
    /// itself an affine map with multiplier `a⁻¹` and increment
    /// `-increment * a⁻¹`, which is composed exactly like a forward jump.
    pub fn retreat(&mut self, delta: u128) {
        let delta = W::truncate(delta).widen();
        let inv = inverse(self.multiplier);
        let back_plus = self.increment.wrapping_neg().wrapping_mul(inv);
        let (mult, plus) = compose(inv, back_plus, delta);
        self.state = mult.wrapping_mul(self.state).wrapping_add(plus);
    }

    /// Jump forwards (`delta > 0`) or backwards (`delta < 0`).
    pub fn jumpahead(&mut self, delta: i128) {
        if delta >= 0 {
            self.advance(delta as u128);
        } else {
            self.retreat(delta.unsigned_abs());
        }
    }

    #[inline(always)]
    pub fn state(&self) -> W {
        self.state
    }

    #[inline]
    pub fn increment(&self) -> W {
        self.increment
    }

    #[inline]
    pub fn multiplier(&self) -> W {
        self.multiplier
    }
}
