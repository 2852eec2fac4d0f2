// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`SliceRandom`] for sampling and shuffling slices
//! *   [`index::sample`] low-level API to choose distinct indices from
//!     `0..length`
//! *   [`weighted::CumulativeWeights`] for weighted selection with
//!     replacement
//!
//! All indices are drawn with `randbelow` over a `u128` bound, so results
//! are the same on 32-bit and 64-bit targets.

pub mod index;
pub mod weighted;

use crate::error::{Error, ErrorKind};
use crate::pcg::RawSource;
use crate::ranged::gen_index;

use self::weighted::CumulativeWeights;

/// Extension trait on slices, providing random sampling methods.
///
/// Any [`RawSource`] may be used; a [`Generator`] is one.
///
/// [`Generator`]: crate::Generator
pub trait SliceRandom {
    /// The element type.
    type Item;

    /// Uniformly sample one element.
    ///
    /// Draws one `randbelow(len)`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyPopulation`] if the slice is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use pcgrandom::seq::SliceRandom;
    /// use pcgrandom::pcg::SetseqXshRr6432;
    ///
    /// let mut rng = SetseqXshRr6432::new(12345, 0);
    /// let choices = [1, 2, 4, 8, 16, 32];
    /// println!("{:?}", choices.choose(&mut rng));
    /// assert!(choices[..0].choose(&mut rng).is_err());
    /// ```
    fn choose<R>(&self, rng: &mut R) -> Result<&Self::Item, Error>
    where
        R: RawSource + ?Sized;

    /// Sample `amount` distinct elements, in random order.
    ///
    /// Uses [`index::sample`]; see there for the guarantees.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfDomain`] if `amount` exceeds the slice length.
    fn sample<R>(&self, rng: &mut R, amount: usize) -> Result<Vec<&Self::Item>, Error>
    where
        R: RawSource + ?Sized;

    /// Sample `amount` elements with replacement, optionally weighted.
    ///
    /// Uses [`weighted::choices`]; see there for the guarantees.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyPopulation`] if the slice is empty, even when
    /// `amount` is zero; [`ErrorKind::InvalidArgument`] if `weights` has a
    /// different length than the slice.
    fn choices<R>(
        &self, rng: &mut R, weights: Option<&CumulativeWeights>, amount: usize,
    ) -> Result<Vec<&Self::Item>, Error>
    where
        R: RawSource + ?Sized;

    /// Shuffle a mutable slice in place.
    ///
    /// This is a Fisher-Yates shuffle from the last index down: each
    /// element `i >= 1` is swapped with one at `randbelow(i + 1)`. Every
    /// permutation is equally likely.
    ///
    /// # Example
    ///
    /// ```
    /// use pcgrandom::seq::SliceRandom;
    /// use pcgrandom::pcg::SetseqXslRr12864;
    ///
    /// let mut rng = SetseqXslRr12864::new(41509, 0);
    /// let mut y = [1, 2, 3, 4, 5];
    /// y.shuffle(&mut rng);
    /// println!("Shuffled: {:?}", y);
    /// ```
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: RawSource + ?Sized;
}

impl<T> SliceRandom for [T] {
    type Item = T;

    fn choose<R>(&self, rng: &mut R) -> Result<&T, Error>
    where
        R: RawSource + ?Sized,
    {
        if self.is_empty() {
            Err(Error::new(ErrorKind::EmptyPopulation, "cannot choose from an empty sequence"))
        } else {
            Ok(&self[gen_index(rng, self.len())])
        }
    }

    fn sample<R>(&self, rng: &mut R, amount: usize) -> Result<Vec<&T>, Error>
    where
        R: RawSource + ?Sized,
    {
        let indices = index::sample(rng, self.len(), amount)?;
        Ok(indices.into_iter().map(|i| &self[i]).collect())
    }

    fn choices<R>(
        &self, rng: &mut R, weights: Option<&CumulativeWeights>, amount: usize,
    ) -> Result<Vec<&T>, Error>
    where
        R: RawSource + ?Sized,
    {
        let indices = weighted::choices(rng, self.len(), weights, amount)?;
        Ok(indices.into_iter().map(|i| &self[i]).collect())
    }

    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: RawSource + ?Sized,
    {
        for i in (1..self.len()).rev() {
            // invariant: elements with index > i have been locked in place.
            self.swap(i, gen_index(rng, i + 1));
        }
    }
}
