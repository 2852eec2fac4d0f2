// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Weighted index sampling
//!
//! This module provides [`CumulativeWeights`], a reusable table of prefix
//! sums for selecting indices with replacement, and [`choices`] built on it.

use crate::error::{Error, ErrorKind};
use crate::pcg::RawSource;
use crate::ranged::{gen_index, random};

/// Cumulative weights for sampling indices `0..len()` with probability
/// proportional to each index's weight.
///
/// Building the table costs `O(n)`; each sample then costs one float draw
/// plus an `O(log n)` binary search, so a table should be kept when the
/// same weights are used for several calls.
///
/// Sampling draws `x = random() * total` and returns the first index whose
/// cumulative weight exceeds `x`. The result is clamped to the last index,
/// since rounding can push `x` up to exactly `total`.
///
/// # Example
///
/// ```
/// use pcgrandom::seq::weighted::CumulativeWeights;
/// use pcgrandom::pcg::SetseqXshRr6432;
///
/// let weights = CumulativeWeights::from_weights(&[2.0, 1.0, 1.0]).unwrap();
/// assert_eq!(weights.total(), 4.0);
///
/// let mut rng = SetseqXshRr6432::new(777, 3);
/// let index = weights.sample(&mut rng);
/// assert!(index < 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWeights {
    cumulative: Vec<f64>,
}

impl CumulativeWeights {
    /// Build from individual weights by prefix summation.
    ///
    /// # Errors
    ///
    /// -   [`ErrorKind::EmptyPopulation`] when `weights` is empty.
    /// -   [`ErrorKind::InvalidWeights`] when a weight is negative or
    ///     not-a-number, or the total is zero or infinite.
    pub fn from_weights(weights: &[f64]) -> Result<Self, Error> {
        let mut total = 0.0;
        let mut cumulative = Vec::with_capacity(weights.len());
        for &w in weights {
            // the negated comparison also catches NaN
            if !(w >= 0.0) {
                return Err(Error::new(ErrorKind::InvalidWeights, "negative or NaN weight"));
            }
            total += w;
            cumulative.push(total);
        }
        Self::checked(cumulative)
    }

    /// Build from cumulative weights, which must be non-decreasing.
    ///
    /// # Errors
    ///
    /// -   [`ErrorKind::EmptyPopulation`] when `cum_weights` is empty.
    /// -   [`ErrorKind::InvalidWeights`] when an entry is negative, NaN or
    ///     smaller than its predecessor, or the total is zero or infinite.
    pub fn from_cumulative(cum_weights: &[f64]) -> Result<Self, Error> {
        let mut prev = 0.0;
        for &w in cum_weights {
            if !(w >= prev) {
                return Err(Error::new(
                    ErrorKind::InvalidWeights,
                    "cumulative weights must be non-decreasing",
                ));
            }
            prev = w;
        }
        Self::checked(cum_weights.to_vec())
    }

    fn checked(cumulative: Vec<f64>) -> Result<Self, Error> {
        let total = match cumulative.last() {
            Some(&total) => total,
            None => {
                return Err(Error::new(ErrorKind::EmptyPopulation, "no weights given"));
            }
        };
        if !(total > 0.0 && total.is_finite()) {
            return Err(Error::new(
                ErrorKind::InvalidWeights,
                "total of weights must be positive and finite",
            ));
        }
        Ok(CumulativeWeights { cumulative })
    }

    /// Number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always false: a table has at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> f64 {
        // non-empty by construction
        self.cumulative[self.cumulative.len() - 1]
    }

    /// The cumulative weights.
    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    /// Sample one index. Consumes the same output as one `random()` call.
    pub fn sample<R: RawSource + ?Sized>(&self, rng: &mut R) -> usize {
        let chosen = random(rng) * self.total();
        self.cumulative
            .partition_point(|&w| w <= chosen)
            .min(self.cumulative.len() - 1)
    }
}

/// Choose `amount` indices from `0..length` with replacement.
///
/// Without `weights` each index is drawn with `randbelow(length)`, so the
/// result is bit-for-bit reproducible. With `weights` each pick consumes
/// one `random()` call; the selected indices may in rare cases differ
/// between platforms, but the amount of output consumed never does.
///
/// # Errors
///
/// -   [`ErrorKind::EmptyPopulation`] when `length == 0`, even if `amount`
///     is zero.
/// -   [`ErrorKind::InvalidArgument`] when `weights` does not have `length`
///     entries.
pub fn choices<R>(
    rng: &mut R, length: usize, weights: Option<&CumulativeWeights>, amount: usize,
) -> Result<Vec<usize>, Error>
where
    R: RawSource + ?Sized,
{
    if length == 0 {
        return Err(Error::new(ErrorKind::EmptyPopulation, "cannot choose from an empty population"));
    }
    match weights {
        None => Ok((0..amount).map(|_| gen_index(rng, length)).collect()),
        Some(weights) if weights.len() != length => Err(Error::invalid_argument(
            "the number of weights does not match the population",
        )),
        Some(weights) => Ok((0..amount).map(|_| weights.sample(rng)).collect()),
    }
}
