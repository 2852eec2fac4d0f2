// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The generator front end

use rand_core::{RngCore, SeedableRng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::pcg::{AnyEngine, EngineKind, EngineState, PcgEngine, RawSource, SeededEngine, Variant};
use crate::ranged;
use crate::seed::SeedValue;
use crate::seq::index;
use crate::seq::weighted::CumulativeWeights;
use crate::seq::SliceRandom;

/// Prefix of [`GeneratorState::version`]; the variant name follows.
const STATE_VERSION_PREFIX: &str = "pcgrandom.";

/// A saved generator state, as returned by [`Generator::getstate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct GeneratorState {
    /// `"pcgrandom."` followed by the variant name, e.g.
    /// `"pcgrandom.setseq_xsh_rr_64_32"`.
    pub version: String,
    /// LCG multiplier.
    pub multiplier: u128,
    /// LCG increment.
    pub increment: u128,
    /// LCG state.
    pub state: u128,
}

/// A PCG engine with a random-module style sampling API.
///
/// For a fixed engine type, seed and sequence, and the same calls in the
/// same order, every integer-valued method (`getrandbits`, `randbelow`,
/// `randrange`, `randint`, `choice`, `sample`, `sample_indices`,
/// `shuffle`, unweighted `choices`) returns identical results on every
/// platform. `random`, `uniform` and weighted `choices` consume a fixed
/// amount of engine output per call, so later calls stay in step even if
/// a float differs in its last bit.
///
/// A generator is not synchronised; share it between threads only behind
/// a lock.
///
/// # Example
///
/// ```
/// use pcgrandom::Generator;
/// use pcgrandom::pcg::SetseqXshRr6432;
///
/// let mut gen = Generator::<SetseqXshRr6432>::new(12345, 1);
/// let roll = gen.randint(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// gen.shuffle(&mut deck);
/// let hand = gen.sample(&deck, 13).unwrap();
/// assert_eq!(hand.len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator<E> {
    engine: E,
}

impl<E: SeededEngine> Generator<E> {
    /// Construct from a seed and a sequence number.
    ///
    /// Both are reduced modulo 2<sup>W</sup> for state width `W`; negative
    /// values wrap. Single-stream engines ignore the sequence.
    pub fn new<T: SeedValue, U: SeedValue>(seed: T, sequence: U) -> Self {
        Generator {
            engine: E::seeded(seed.to_seed_word(), Some(sequence.to_seed_word())),
        }
    }

    /// Construct from a seed, with the variant's default stream.
    pub fn with_seed<T: SeedValue>(seed: T) -> Self {
        Generator {
            engine: E::seeded(seed.to_seed_word(), None),
        }
    }

    /// Construct with a custom LCG multiplier.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidArgument`] unless `multiplier` reduced modulo
    /// 2<sup>W</sup> is of the form `4k + 1`.
    pub fn with_multiplier<T: SeedValue, U: SeedValue>(
        seed: T, sequence: Option<U>, multiplier: u128,
    ) -> Result<Self, Error> {
        let engine = E::with_multiplier(
            seed.to_seed_word(),
            sequence.map(SeedValue::to_seed_word),
            multiplier,
        )?;
        Ok(Generator { engine })
    }
}

impl Generator<AnyEngine> {
    /// Construct a generator whose engine is chosen at run time.
    ///
    /// # Example
    ///
    /// ```
    /// use pcgrandom::Generator;
    ///
    /// let kind = "XSL-RR".parse().unwrap();
    /// let mut gen = Generator::with_kind(kind, 54321, None);
    /// assert!(gen.randrange(100, None, 1).unwrap() < 100);
    /// ```
    pub fn with_kind<T: SeedValue>(kind: EngineKind, seed: T, sequence: Option<u128>) -> Self {
        Generator {
            engine: AnyEngine::new(kind, seed.to_seed_word(), sequence),
        }
    }
}

impl<E: PcgEngine> Generator<E> {
    /// Wrap an existing engine.
    pub fn from_engine(engine: E) -> Self {
        Generator { engine }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Unwrap the underlying engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Describe the engine variant.
    pub fn variant(&self) -> Variant {
        self.engine.variant()
    }

    /// Reseed, keeping the current stream and multiplier.
    pub fn seed<T: SeedValue>(&mut self, seed: T) {
        self.engine.seed(seed.to_seed_word());
    }

    /// Return the current state, for use with [`Generator::setstate`].
    pub fn getstate(&self) -> GeneratorState {
        let EngineState {
            multiplier,
            increment,
            state,
        } = self.engine.snapshot();
        GeneratorState {
            version: format!("{}{}", STATE_VERSION_PREFIX, self.variant().name),
            multiplier,
            increment,
            state,
        }
    }

    /// Restore a state saved by [`Generator::getstate`].
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidState`] if the state was saved from a different
    /// variant or is not a valid state of this one. The generator is left
    /// unchanged.
    pub fn setstate(&mut self, state: &GeneratorState) -> Result<(), Error> {
        let name = self.variant().name;
        let matches = state
            .version
            .strip_prefix(STATE_VERSION_PREFIX)
            .map_or(false, |v| v == name);
        if !matches {
            return Err(Error::new(
                ErrorKind::InvalidState,
                "state saved from a different generator variant",
            ));
        }
        debug!("{}: restoring state", name);
        self.engine.restore(&EngineState {
            multiplier: state.multiplier,
            increment: state.increment,
            state: state.state,
        })
    }

    /// Move `delta` steps forwards, or backwards if negative, as if `delta`
    /// raw words had been drawn (or undrawn). Runs in `O(log |delta|)`.
    pub fn jumpahead(&mut self, delta: i128) {
        self.engine.jumpahead(delta);
    }

    /// Return an integer with `k` random bits; see [`ranged::getrandbits`].
    #[inline]
    pub fn getrandbits(&mut self, k: u32) -> Result<u128, Error> {
        ranged::getrandbits(&mut self.engine, k)
    }

    /// Return an integer in `[0, n)`; see [`ranged::randbelow`].
    #[inline]
    pub fn randbelow(&mut self, n: u128) -> Result<u128, Error> {
        ranged::randbelow(&mut self.engine, n)
    }

    /// Return an element of `range(start, stop, step)`; see
    /// [`ranged::randrange`].
    ///
    /// `randrange(n, None, 1)` is an integer in `[0, n)`.
    #[inline]
    pub fn randrange(&mut self, start: i128, stop: Option<i128>, step: i128) -> Result<i128, Error> {
        ranged::randrange(&mut self.engine, start, stop, step)
    }

    /// Return an integer in `[a, b]`; see [`ranged::randint`].
    #[inline]
    pub fn randint(&mut self, a: i128, b: i128) -> Result<i128, Error> {
        ranged::randint(&mut self.engine, a, b)
    }

    /// Return a float in `[0, 1)`; see [`ranged::random`].
    #[inline]
    pub fn random(&mut self) -> f64 {
        ranged::random(&mut self.engine)
    }

    /// Return `a + (b - a) * random()`.
    #[inline]
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        ranged::uniform(&mut self.engine, a, b)
    }

    /// Choose one element of `seq` uniformly.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyPopulation`] if `seq` is empty.
    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, Error> {
        seq.choose(&mut self.engine)
    }

    /// Choose `k` elements of `population` with replacement.
    ///
    /// At most one of `weights` (relative weights) and `cum_weights`
    /// (cumulative weights) may be given. Without either, every element is
    /// equally likely and the picks are exactly reproducible. With weights,
    /// see [`CumulativeWeights`].
    ///
    /// # Errors
    ///
    /// -   [`ErrorKind::EmptyPopulation`] if `population` is empty, even when
    ///     `k` is zero.
    /// -   [`ErrorKind::InvalidArgument`] if both kinds of weights are given
    ///     or their length differs from that of `population`.
    /// -   [`ErrorKind::InvalidWeights`] if the weights do not sum to a
    ///     positive finite total.
    pub fn choices<'a, T>(
        &mut self, population: &'a [T], weights: Option<&[f64]>, cum_weights: Option<&[f64]>,
        k: usize,
    ) -> Result<Vec<&'a T>, Error> {
        if population.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyPopulation,
                "cannot choose from an empty population",
            ));
        }
        if let Some(w) = weights.or(cum_weights) {
            if w.len() != population.len() {
                return Err(Error::invalid_argument(
                    "the number of weights does not match the population",
                ));
            }
        }
        let table = match (weights, cum_weights) {
            (None, None) => None,
            (Some(w), None) => Some(CumulativeWeights::from_weights(w)?),
            (None, Some(cw)) => Some(CumulativeWeights::from_cumulative(cw)?),
            (Some(_), Some(_)) => {
                return Err(Error::invalid_argument(
                    "cannot specify both weights and cumulative weights",
                ));
            }
        };
        population.choices(&mut self.engine, table.as_ref(), k)
    }

    /// Like [`Generator::choices`], with a prebuilt weight table.
    pub fn choices_cached<'a, T>(
        &mut self, population: &'a [T], weights: &CumulativeWeights, k: usize,
    ) -> Result<Vec<&'a T>, Error> {
        population.choices(&mut self.engine, Some(weights), k)
    }

    /// Choose `k` distinct elements of `population`, in random order.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfDomain`] if `k` exceeds the population size.
    pub fn sample<'a, T>(&mut self, population: &'a [T], k: usize) -> Result<Vec<&'a T>, Error> {
        population.sample(&mut self.engine, k)
    }

    /// Choose `k` distinct indices from `0..n`, in random order; see
    /// [`index::sample`].
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Result<Vec<usize>, Error> {
        index::sample(&mut self.engine, n, k)
    }

    /// Shuffle `seq` in place.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) {
        seq.shuffle(&mut self.engine)
    }
}

impl<E: PcgEngine> RawSource for Generator<E> {
    #[inline]
    fn output_bits(&self) -> u32 {
        self.engine.output_bits()
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        self.engine.next_raw()
    }
}

impl<E: RngCore> RngCore for Generator<E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.engine.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.engine.try_fill_bytes(dest)
    }
}

impl<E: SeedableRng> SeedableRng for Generator<E> {
    type Seed = E::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Generator {
            engine: E::from_seed(seed),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pcg::{OneseqXshRr6432, SetseqXshRr6432, SetseqXshRs6432, SetseqXslRr12864};

    #[test]
    fn test_state_round_trip() {
        let mut gen = Generator::<SetseqXslRr12864>::new(12345, 7);
        gen.random();
        let state = gen.getstate();
        assert_eq!(state.version, "pcgrandom.setseq_xsl_rr_128_64");
        let expected: Vec<u128> = (0..10).map(|_| gen.getrandbits(100).unwrap()).collect();

        let mut other = Generator::<SetseqXslRr12864>::new(1, 1);
        other.setstate(&state).unwrap();
        let actual: Vec<u128> = (0..10).map(|_| other.getrandbits(100).unwrap()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_setstate_rejects_other_variant() {
        let gen = Generator::<SetseqXshRr6432>::new(1, 2);
        let mut other = Generator::<SetseqXshRs6432>::new(1, 2);
        let before = other.clone();
        let err = other.setstate(&gen.getstate()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(other, before);

        let mut oneseq = Generator::<OneseqXshRr6432>::with_seed(1);
        assert!(oneseq.setstate(&gen.getstate()).is_err());

        let mut bad = gen.getstate();
        bad.version = "setseq_xsh_rr_64_32".into();
        let mut same = Generator::<SetseqXshRr6432>::new(1, 2);
        assert!(same.setstate(&bad).is_err());
        bad = gen.getstate();
        bad.increment = 4;
        assert_eq!(same.setstate(&bad).unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_seed_keeps_stream() {
        let mut gen = Generator::<SetseqXshRr6432>::new(1, 99);
        gen.randbelow(1000).unwrap();
        gen.seed(5);
        assert_eq!(gen, Generator::<SetseqXshRr6432>::new(5, 99));
    }

    #[test]
    fn test_choices_argument_errors() {
        let mut gen = Generator::<SetseqXshRr6432>::new(777, 3);
        let pop = [1, 2, 3];
        let w: &[f64] = &[1.0, 1.0, 1.0];
        let err = gen.choices(&pop, Some(w), Some(w), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = gen.choices(&pop, Some(&w[..2]), None, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = gen.choices(&pop, Some(&[0.0; 3][..]), None, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWeights);
        let err = gen.choices(&pop, Some(&[][..]), None, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = gen.choices(&pop, None, Some(&[][..]), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = gen.choices(&pop, None, Some(&[1.0, 2.0, 3.0, 4.0][..]), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = gen.choices::<u8>(&[], Some(&[][..]), None, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyPopulation);
    }

    #[test]
    fn test_with_kind_matches_static_type() {
        let mut any = Generator::with_kind(EngineKind::SetseqXslRr12864, 41509, None);
        let mut fixed = Generator::<SetseqXslRr12864>::with_seed(41509);
        assert_eq!(any.getstate(), fixed.getstate());
        for _ in 0..20 {
            assert_eq!(any.randrange(1000, None, 1), fixed.randrange(1000, None, 1));
        }
    }

    #[test]
    fn test_with_multiplier() {
        let gen = Generator::<SetseqXshRr6432>::with_multiplier(1, Some(2), 5).unwrap();
        assert_eq!(gen.getstate().multiplier, 5);
        let err = Generator::<SetseqXshRr6432>::with_multiplier(1, None::<u8>, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_rng_core() {
        let mut gen = Generator::<SetseqXshRr6432>::new(42, 54);
        assert_eq!(gen.next_u32(), 0xa15c02b7);
        let mut seed = [0u8; 16];
        seed[0] = 42;
        seed[8] = 54;
        assert_eq!(
            Generator::<SetseqXshRr6432>::from_seed(seed),
            Generator::<SetseqXshRr6432>::new(42, 54)
        );
    }
}
