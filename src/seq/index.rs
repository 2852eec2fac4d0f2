// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Low-level API for sampling indices

use std::collections::HashMap;

use crate::error::{Error, ErrorKind};
use crate::pcg::RawSource;
use crate::ranged::gen_index;

/// Randomly sample exactly `amount` distinct indices from `0..length`, in
/// random order.
///
/// Every one of the `length! / (length - amount)!` ordered results is
/// equally likely. Exactly `amount` values are drawn through `randbelow`
/// (each of which may itself reject and redraw); no index is ever resampled
/// for being a duplicate.
///
/// This is Floyd's algorithm run as an explicit bijection. Slots are filled
/// from `amount - 1` down to `0`; slot `i` draws `j` from `i..length`. If
/// `j` already holds a slot, that slot moves to `i`, which no earlier step
/// can have taken, and `j` takes slot `i`. Time and memory are `O(amount)`.
///
/// `amount == 0` returns an empty vector without drawing; `amount ==
/// length` gives a full permutation.
///
/// # Errors
///
/// [`ErrorKind::OutOfDomain`] if `amount > length`.
pub fn sample<R>(rng: &mut R, length: usize, amount: usize) -> Result<Vec<usize>, Error>
where
    R: RawSource + ?Sized,
{
    if amount > length {
        return Err(Error::new(
            ErrorKind::OutOfDomain,
            "sample larger than population",
        ));
    }
    Ok(sample_floyd(rng, length, amount))
}

/// [`sample`] for `amount <= length`.
pub(crate) fn sample_floyd<R>(rng: &mut R, length: usize, amount: usize) -> Vec<usize>
where
    R: RawSource + ?Sized,
{
    debug_assert!(amount <= length);
    // element -> slot
    let mut position: HashMap<usize, usize> = HashMap::with_capacity(amount);
    for i in (0..amount).rev() {
        let j = i + gen_index(rng, length - i);
        if let Some(&slot) = position.get(&j) {
            position.insert(i, slot);
        }
        position.insert(j, i);
    }
    debug_assert_eq!(position.len(), amount);

    let mut indices = vec![0; amount];
    for (element, slot) in position {
        indices[slot] = element;
    }
    indices
}
