// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2017 Paul Dicker.
// Copyright 2014-2017, 2019 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PCG engine types

use super::lcg::{check_multiplier, increment_for_sequence, Lcg, LcgWord};
use super::output::{xsh_rr_64_32, xsh_rs_64_32, xsl_rr_128_64};
use super::{
    EngineState, OneSeq, PcgEngine, Permutation, RawSource, SeededEngine, SetSeq, Stream,
    StreamKind, Variant,
};
use crate::error::Error;
use crate::seed::SeedValue;
use core::fmt;
use core::marker::PhantomData;
use rand_core::{impls, le, RngCore, SeedableRng};

// Knuth's MMIX multiplier, as used by PCG for 64-bit state.
const MULTIPLIER_64: u64 = 6364136223846793005;
const INCREMENT_64: u64 = 1442695040888963407;

// From Table 4 of L'Ecuyer's paper, as used by PCG for 128-bit state.
const MULTIPLIER_128: u128 = 47026247687942121848144207491837523525;
const INCREMENT_128: u128 = 117397592171526113268558934119004209487;

/// Combine little-endian `u64` words into a seed word and a sequence word,
/// each taking half of `words`.
fn split_seed_words(words: &[u64]) -> (u128, u128) {
    let half = words.len() / 2;
    let combine = |ws: &[u64]| {
        ws.iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 64) | u128::from(w))
    };
    (combine(&words[..half]), combine(&words[half..]))
}

macro_rules! pcg_engine {
    (
        $(#[$attr:meta])*
        pub struct $name:ident;
        word = $word:ty;
        output = $out:ty;
        permute = $permute:ident, $perm:expr;
        multiplier = $mult:expr;
        increment = $inc:expr;
        output_previous = $prev:expr;
        names = $setseq_name:expr, $oneseq_name:expr;
        seed_bytes = $seed_bytes:expr;
    ) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name<S = SetSeq> {
            lcg: Lcg<$word>,
            stream: PhantomData<S>,
        }

        impl<S: Stream> $name<S> {
            /// Construct from a seed and a sequence number, reproducing the
            /// PCG reference seeding exactly.
            ///
            /// Both values are reduced modulo the state width; negative
            /// values wrap. With the [`OneSeq`] policy the sequence is
            /// ignored.
            pub fn new<T: SeedValue, U: SeedValue>(seed: T, sequence: U) -> Self {
                Self::seeded(seed.to_seed_word(), Some(sequence.to_seed_word()))
            }

            /// Construct from a seed, using the variant's default increment.
            pub fn with_seed<T: SeedValue>(seed: T) -> Self {
                Self::seeded(seed.to_seed_word(), None)
            }

            /// Advance the state by `delta` steps (modulo the period).
            ///
            /// Using this function is equivalent to drawing `delta` raw
            /// output words.
            #[inline]
            pub fn advance(&mut self, delta: u128) {
                self.lcg.advance(delta);
            }

            fn from_lcg(mut lcg: Lcg<$word>, seed: u128) -> Self {
                lcg.bootstrap(<$word as LcgWord>::truncate(seed));
                $name {
                    lcg,
                    stream: PhantomData,
                }
            }

            fn select_increment(sequence: Option<u128>) -> $word {
                match (S::KIND, sequence) {
                    (StreamKind::SetSeq, Some(sequence)) => increment_for_sequence(sequence),
                    (StreamKind::OneSeq, Some(sequence)) => {
                        debug!(
                            "{}: ignoring sequence {} for a single-stream engine",
                            stringify!($name),
                            sequence
                        );
                        $inc
                    }
                    (_, None) => $inc,
                }
            }

            #[inline(always)]
            fn output(&self) -> $out {
                $permute(self.lcg.state())
            }
        }

        // Custom Debug implementation that does not expose the internal state
        impl<S: Stream> fmt::Debug for $name<S> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} {{}}", <Self as SeededEngine>::VARIANT.name)
            }
        }

        impl<S: Stream> RawSource for $name<S> {
            #[inline(always)]
            fn output_bits(&self) -> u32 {
                <$out>::BITS
            }

            #[inline]
            fn next_raw(&mut self) -> u64 {
                if $prev {
                    let out = self.output();
                    self.lcg.step();
                    u64::from(out)
                } else {
                    self.lcg.step();
                    u64::from(self.output())
                }
            }
        }

        impl<S: Stream> PcgEngine for $name<S> {
            #[inline]
            fn variant(&self) -> Variant {
                <Self as SeededEngine>::VARIANT
            }

            fn seed(&mut self, seed: u128) {
                debug!("{}: seeding", <Self as SeededEngine>::VARIANT.name);
                self.lcg.bootstrap(<$word as LcgWord>::truncate(seed));
            }

            fn jumpahead(&mut self, delta: i128) {
                trace!(
                    "{}: jumping {} by {}",
                    <Self as SeededEngine>::VARIANT.name,
                    if delta < 0 { "back" } else { "ahead" },
                    delta.unsigned_abs()
                );
                self.lcg.jumpahead(delta);
            }

            fn snapshot(&self) -> EngineState {
                EngineState {
                    multiplier: self.lcg.multiplier().widen(),
                    increment: self.lcg.increment().widen(),
                    state: self.lcg.state().widen(),
                }
            }

            fn restore(&mut self, state: &EngineState) -> Result<(), Error> {
                self.lcg = Lcg::from_parts(state.multiplier, state.increment, state.state)?;
                Ok(())
            }
        }

        impl<S: Stream> SeededEngine for $name<S> {
            const VARIANT: Variant = Variant {
                name: match S::KIND {
                    StreamKind::SetSeq => $setseq_name,
                    StreamKind::OneSeq => $oneseq_name,
                },
                state_bits: <$word>::BITS,
                output_bits: <$out>::BITS,
                permutation: $perm,
                stream: S::KIND,
                multiplier: $mult as u128,
                default_increment: $inc as u128,
                output_previous: $prev,
            };

            fn seeded(seed: u128, sequence: Option<u128>) -> Self {
                let increment = Self::select_increment(sequence);
                Self::from_lcg(Lcg::new($mult, increment), seed)
            }

            fn with_multiplier(
                seed: u128, sequence: Option<u128>, multiplier: u128,
            ) -> Result<Self, Error> {
                let multiplier = <$word as LcgWord>::truncate(multiplier);
                check_multiplier(multiplier)?;
                let increment = Self::select_increment(sequence);
                Ok(Self::from_lcg(Lcg::new(multiplier, increment), seed))
            }
        }

        impl<S: Stream> SeedableRng for $name<S> {
            type Seed = [u8; $seed_bytes];

            /// The first half of `seed` is the little-endian seed value, the
            /// second half the little-endian sequence number (ignored by
            /// single-stream engines). Both go through the usual PCG seeding.
            fn from_seed(seed: Self::Seed) -> Self {
                let mut words = [0u64; $seed_bytes / 8];
                le::read_u64_into(&seed, &mut words);
                let (seed, sequence) = split_seed_words(&words);
                Self::seeded(seed, Some(sequence))
            }
        }
    };
}

pcg_engine! {
    /// A PCG random number generator (XSH RR 64/32 variant).
    ///
    /// Permuted Congruential Generator with 64-bit state, internal Linear
    /// Congruential Generator, and 32-bit output via "xorshift high (bits),
    /// random rotation" output function. This is the generator described in
    /// section 6.3.1 of the PCG paper and corresponds to
    /// `pcg_engines::setseq_xsh_rr_64_32` (with [`SetSeq`]) or
    /// `pcg_engines::oneseq_xsh_rr_64_32` (with [`OneSeq`]) from pcg-cpp.
    ///
    /// The output is computed from the state before it is advanced.
    pub struct Lcg64XshRr32;
    word = u64;
    output = u32;
    permute = xsh_rr_64_32, Permutation::XshRr;
    multiplier = MULTIPLIER_64;
    increment = INCREMENT_64;
    output_previous = true;
    names = "setseq_xsh_rr_64_32", "oneseq_xsh_rr_64_32";
    seed_bytes = 16;
}

pcg_engine! {
    /// A PCG random number generator (XSH RS 64/32 variant).
    ///
    /// Permuted Congruential Generator with 64-bit state and 32-bit output
    /// via "xorshift high (bits), random shift". Slightly cheaper than
    /// [`Lcg64XshRr32`], but discards more state bits and has weaker
    /// equidistribution. Corresponds to `pcg_engines::setseq_xsh_rs_64_32`
    /// and `pcg_engines::oneseq_xsh_rs_64_32` from pcg-cpp.
    pub struct Lcg64XshRs32;
    word = u64;
    output = u32;
    permute = xsh_rs_64_32, Permutation::XshRs;
    multiplier = MULTIPLIER_64;
    increment = INCREMENT_64;
    output_previous = true;
    names = "setseq_xsh_rs_64_32", "oneseq_xsh_rs_64_32";
    seed_bytes = 16;
}

pcg_engine! {
    /// A PCG random number generator (XSL RR 128/64 variant).
    ///
    /// Permuted Congruential Generator with 128-bit state, internal Linear
    /// Congruential Generator, and 64-bit output via "xorshift low (bits),
    /// random rotation" output function. Corresponds to
    /// `pcg_engines::setseq_xsl_rr_128_64` and
    /// `pcg_engines::oneseq_xsl_rr_128_64` from pcg-cpp.
    ///
    /// As in pcg-cpp, the state is advanced before the output is computed.
    pub struct Lcg128XslRr64;
    word = u128;
    output = u64;
    permute = xsl_rr_128_64, Permutation::XslRr;
    multiplier = MULTIPLIER_128;
    increment = INCREMENT_128;
    output_previous = false;
    names = "setseq_xsl_rr_128_64", "oneseq_xsl_rr_128_64";
    seed_bytes = 32;
}

/// `pcg_engines::setseq_xsh_rr_64_32`.
pub type SetseqXshRr6432 = Lcg64XshRr32<SetSeq>;
/// `pcg_engines::oneseq_xsh_rr_64_32`.
pub type OneseqXshRr6432 = Lcg64XshRr32<OneSeq>;
/// `pcg_engines::setseq_xsh_rs_64_32`.
pub type SetseqXshRs6432 = Lcg64XshRs32<SetSeq>;
/// `pcg_engines::oneseq_xsh_rs_64_32`.
pub type OneseqXshRs6432 = Lcg64XshRs32<OneSeq>;
/// `pcg_engines::setseq_xsl_rr_128_64`.
pub type SetseqXslRr12864 = Lcg128XslRr64<SetSeq>;
/// `pcg_engines::oneseq_xsl_rr_128_64`.
pub type OneseqXslRr12864 = Lcg128XslRr64<OneSeq>;

impl<S: Stream> RngCore for Lcg64XshRr32<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<S: Stream> RngCore for Lcg64XshRs32<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<S: Stream> RngCore for Lcg128XslRr64<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_seed_words() {
        assert_eq!(split_seed_words(&[42, 54]), (42, 54));
        assert_eq!(split_seed_words(&[1, 2, 3, 4]), ((2 << 64) | 1, (4 << 64) | 3));
    }

    #[test]
    fn test_xsh_rr_true_values() {
        // Numbers determined using `pcg_engines::setseq_xsh_rr_64_32` from pcg-cpp.
        let mut rng = SetseqXshRr6432::new(42, 54);
        let mut results = [0u32; 6];
        for i in results.iter_mut() {
            *i = rng.next_u32();
        }
        let expected: [u32; 6] = [
            0xa15c02b7, 0x7b47f409, 0xba1d3330, 0x83d2f293, 0xbfa4784b, 0xcbed606e,
        ];
        assert_eq!(results, expected);
    }

    #[test]
    fn test_xsl_rr_true_values() {
        // Numbers determined using `pcg_engines::setseq_xsl_rr_128_64` from pcg-cpp.
        let mut rng = SetseqXslRr12864::new(42, 54);
        let mut results = [0u64; 3];
        for i in results.iter_mut() {
            *i = rng.next_u64();
        }
        let expected: [u64; 3] = [0x86b1da1d72062b68, 0x1304aa46c9853d39, 0xa3670e9e0dd50358];
        assert_eq!(results, expected);
    }

    #[test]
    fn test_from_seed_matches_new() {
        let mut seed = [0u8; 16];
        seed[0] = 42;
        seed[8] = 54;
        let mut rng1 = SetseqXshRr6432::from_seed(seed);
        let mut rng2 = SetseqXshRr6432::new(42, 54);
        assert_eq!(rng1, rng2);
        assert_eq!(rng1.next_u64(), rng2.next_u64());

        let mut seed = [0u8; 32];
        seed[0] = 42;
        seed[16] = 54;
        assert_eq!(SetseqXslRr12864::from_seed(seed), SetseqXslRr12864::new(42, 54));
    }

    #[test]
    fn test_oneseq_ignores_sequence() {
        let rng1 = OneseqXshRs6432::new(123, 54);
        let rng2 = OneseqXshRs6432::with_seed(123);
        assert_eq!(rng1, rng2);
        assert_eq!(rng1.snapshot().increment, INCREMENT_64 as u128);
    }

    #[test]
    fn test_default_sequence_is_default_increment() {
        let setseq = SetseqXslRr12864::with_seed(9);
        let oneseq = OneseqXslRr12864::with_seed(9);
        assert_eq!(setseq.snapshot(), oneseq.snapshot());
        let default_sequence = INCREMENT_128 >> 1;
        assert_eq!(SetseqXslRr12864::new(9, default_sequence).snapshot(), setseq.snapshot());
    }

    #[test]
    fn test_variant() {
        let v = OneseqXslRr12864::VARIANT;
        assert_eq!(v.name, "oneseq_xsl_rr_128_64");
        assert_eq!((v.state_bits, v.output_bits), (128, 64));
        assert_eq!(v.stream, StreamKind::OneSeq);
        assert!(!v.output_previous);
        let v = SetseqXshRs6432::VARIANT;
        assert_eq!(v.name, "setseq_xsh_rs_64_32");
        assert_eq!(v.permutation, Permutation::XshRs);
        assert_eq!(v.multiplier, MULTIPLIER_64 as u128);
        assert!(v.output_previous);
    }

    #[test]
    fn test_with_multiplier() {
        let err = SetseqXshRr6432::with_multiplier(1, Some(2), 7).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
        let mut rng = SetseqXshRr6432::with_multiplier(1, Some(2), 5).unwrap();
        assert_eq!(rng.snapshot().multiplier, 5);
        let state = rng.snapshot();
        for _ in 0..10 {
            rng.next_raw();
        }
        rng.jumpahead(-10);
        assert_eq!(rng.snapshot(), state);
    }

    #[test]
    fn test_debug_hides_state() {
        let rng = SetseqXshRr6432::new(42, 54);
        assert_eq!(format!("{:?}", rng), "setseq_xsh_rr_64_32 {}");
    }

    #[test]
    fn test_restore_rejects_invalid_words() {
        let mut rng = SetseqXshRr6432::new(42, 54);
        let good = rng.snapshot();
        let mut bad = good;
        bad.increment = 2;
        assert!(rng.restore(&bad).is_err());
        assert_eq!(rng.snapshot(), good);
        bad = good;
        bad.state = 1 << 64;
        assert!(rng.restore(&bad).is_err());
        assert!(rng.restore(&good).is_ok());
    }

    #[test]
    fn test_advancing() {
        for seed in 0..20u64 {
            let mut rng1 = SetseqXshRs6432::new(seed, seed * 3);
            let mut rng2 = rng1.clone();
            for _ in 0..20 {
                rng1.next_u32();
            }
            rng2.advance(20);
            assert_eq!(rng1, rng2);
        }
    }
}
