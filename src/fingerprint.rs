// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reproducibility fingerprints
//!
//! A [`Fingerprint`] is a small set of standard samples drawn from one
//! generator state. Stored fingerprints make it easy to check that a
//! generator still produces the values it used to.

use core::fmt;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::generator::Generator;
use crate::pcg::PcgEngine;
use crate::ranged::{gen_index, random, top_bits};
use crate::seq::index::sample_floyd;
use crate::seq::SliceRandom;

const CARD_SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];
const CARD_VALUES: [&str; 13] = [
    "Ace", "King", "Queen", "Jack", "Ten", "Nine", "Eight", "Seven", "Six", "Five", "Four",
    "Three", "Two",
];

/// Standard samples, each drawn from the same starting state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Fingerprint {
    /// 13 cards sampled from a 52-card deck ordered by suit, then value.
    pub bridge_hand: Vec<String>,
    /// 100 choices from `['H', 'T']`.
    pub coin_tosses: String,
    /// 20 values of `randint(1, 6)`.
    pub die_rolls: Vec<u8>,
    /// 20 values of `random()`.
    pub floats: Vec<f64>,
    /// `0..20` after a shuffle.
    pub shuffle: Vec<u32>,
    /// 20 values of `getrandbits(32)`.
    pub words: Vec<u32>,
}

/// The 52 card names, `"Ace of Spades"` first and `"Two of Clubs"` last.
pub fn card_deck() -> Vec<String> {
    CARD_SUITS
        .iter()
        .flat_map(|suit| CARD_VALUES.iter().map(move |value| format!("{} of {}", value, suit)))
        .collect()
}

/// Compute the fingerprint of `rng`'s current state.
///
/// Each part is drawn from its own copy of `rng`, so all parts start from
/// the same state and `rng` itself does not advance.
pub fn fingerprint<E: PcgEngine>(rng: &Generator<E>) -> Fingerprint {
    let deck = card_deck();
    let mut r = rng.clone();
    let bridge_hand = sample_floyd(&mut r, deck.len(), 13)
        .into_iter()
        .map(|i| deck[i].clone())
        .collect();

    let mut r = rng.clone();
    let coin_tosses = (0..100).map(|_| ['H', 'T'][gen_index(&mut r, 2)]).collect();

    let mut r = rng.clone();
    let die_rolls = (0..20).map(|_| 1 + gen_index(&mut r, 6) as u8).collect();

    let mut r = rng.clone();
    let floats = (0..20).map(|_| random(&mut r)).collect();

    let mut r = rng.clone();
    let mut shuffle: Vec<u32> = (0..20).collect();
    shuffle.shuffle(&mut r);

    let mut r = rng.clone();
    let words = (0..20).map(|_| top_bits(&mut r, 32) as u32).collect();

    Fingerprint {
        bridge_hand,
        coin_tosses,
        die_rolls,
        floats,
        shuffle,
        words,
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "bridge_hand: {}", self.bridge_hand.join(", "))?;
        writeln!(f, "coin_tosses: {}", self.coin_tosses)?;
        writeln!(f, "die_rolls: {:?}", self.die_rolls)?;
        writeln!(f, "floats: {:?}", self.floats)?;
        writeln!(f, "shuffle: {:?}", self.shuffle)?;
        write!(f, "words: {:?}", self.words)
    }
}
