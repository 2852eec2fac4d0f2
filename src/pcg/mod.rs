// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The PCG engines.
//!
//! Three output permutations are provided, each over an LCG of twice the
//! output width, and each in two stream flavours:
//!
//! | Family | State | Output | Type |
//! |---|---|---|---|
//! | XSH-RR | 64 bits | 32 bits | [`Lcg64XshRr32`] |
//! | XSH-RS | 64 bits | 32 bits | [`Lcg64XshRs32`] |
//! | XSL-RR | 128 bits | 64 bits | [`Lcg128XslRr64`] |
//!
//! With the [`SetSeq`] stream policy every instance carries its own odd LCG
//! increment, selected by a `sequence` number; with [`OneSeq`] all instances
//! of the family share one fixed increment. The six combinations have aliases
//! named after the PCG reference engines, e.g. [`SetseqXshRr6432`].
//!
//! All engines reproduce the PCG reference implementation bit for bit,
//! including its seeding procedure, and support jumping forwards and
//! backwards in `O(log delta)` time.

mod any;
mod engines;
mod lcg;
mod output;

pub use self::any::{AnyEngine, EngineKind};
pub use self::engines::{
    Lcg128XslRr64, Lcg64XshRr32, Lcg64XshRs32, OneseqXshRr6432, OneseqXshRs6432,
    OneseqXslRr12864, SetseqXshRr6432, SetseqXshRs6432, SetseqXslRr12864,
};

use crate::error::Error;
use core::fmt;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// The output permutation of a PCG family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permutation {
    /// Xorshift high, random rotation.
    XshRr,
    /// Xorshift high, random shift.
    XshRs,
    /// Xorshift low (xor of the state halves), random rotation.
    XslRr,
}

/// How an engine's LCG increment is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Per-instance increment `2 * sequence + 1`.
    SetSeq,
    /// One fixed increment shared by every instance of the variant.
    OneSeq,
}

/// Fixed description of a concrete engine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Name of the equivalent PCG reference engine, e.g.
    /// `"setseq_xsh_rr_64_32"`.
    pub name: &'static str,
    /// Width of the LCG state.
    pub state_bits: u32,
    /// Width of each raw output word.
    pub output_bits: u32,
    /// Output permutation.
    pub permutation: Permutation,
    /// Stream policy.
    pub stream: StreamKind,
    /// Default LCG multiplier.
    pub multiplier: u128,
    /// Increment used when no sequence is given (and always, for
    /// [`StreamKind::OneSeq`]).
    pub default_increment: u128,
    /// Whether output is computed from the state before it is advanced
    /// (true) or after (false).
    pub output_previous: bool,
}

/// Stream policy marker: a per-instance increment selected by a sequence
/// number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SetSeq;

/// Stream policy marker: one fixed increment for the whole variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OneSeq;

mod private {
    pub trait Sealed {}
    impl Sealed for super::SetSeq {}
    impl Sealed for super::OneSeq {}
}

/// A stream policy; implemented by [`SetSeq`] and [`OneSeq`] only.
pub trait Stream: private::Sealed + Copy + Default + fmt::Debug + PartialEq + Eq + 'static {
    /// The policy as a value.
    const KIND: StreamKind;
}

impl Stream for SetSeq {
    const KIND: StreamKind = StreamKind::SetSeq;
}

impl Stream for OneSeq {
    const KIND: StreamKind = StreamKind::OneSeq;
}

/// The raw words of an engine's LCG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct EngineState {
    /// LCG multiplier.
    pub multiplier: u128,
    /// LCG increment (odd).
    pub increment: u128,
    /// Current LCG state.
    pub state: u128,
}

/// A source of fixed-width raw output words.
///
/// This is all the sampling algorithms in this crate need from a generator.
pub trait RawSource {
    /// Number of significant bits in each word returned by
    /// [`RawSource::next_raw`]: 32 or 64.
    fn output_bits(&self) -> u32;

    /// Return the next raw output word, advancing the state exactly once.
    ///
    /// Only the low [`RawSource::output_bits`] bits may be set.
    fn next_raw(&mut self) -> u64;
}

impl<'a, R: RawSource + ?Sized> RawSource for &'a mut R {
    #[inline(always)]
    fn output_bits(&self) -> u32 {
        (**self).output_bits()
    }

    #[inline(always)]
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }
}

/// The interface shared by every PCG engine.
pub trait PcgEngine: RawSource + Clone + fmt::Debug {
    /// Describe this engine.
    fn variant(&self) -> Variant;

    /// Reseed from an integer seed (reduced modulo 2<sup>W</sup>), keeping
    /// the current increment and multiplier.
    fn seed(&mut self, seed: u128);

    /// Move the state `delta` steps forwards (or backwards if negative) in
    /// `O(log |delta|)` time. The effect is the same as drawing `delta` raw
    /// words, or undoing that many draws.
    fn jumpahead(&mut self, delta: i128);

    /// Copy out the LCG words.
    fn snapshot(&self) -> EngineState;

    /// Replace the LCG words. Fails with [`ErrorKind::InvalidState`] if the
    /// words do not fit the state width, the increment is even or the
    /// multiplier is not of the form `4k + 1`; the engine is then left
    /// unchanged.
    ///
    /// [`ErrorKind::InvalidState`]: crate::ErrorKind::InvalidState
    fn restore(&mut self, state: &EngineState) -> Result<(), Error>;
}

/// An engine type with a fixed variant, constructible from a seed.
pub trait SeededEngine: PcgEngine + Sized {
    /// The variant of every instance of this type.
    const VARIANT: Variant;

    /// Construct from a seed and an optional sequence number, both already
    /// reduced modulo 2<sup>128</sup>.
    ///
    /// Without a sequence the variant's default increment is used; oneseq
    /// variants always use it.
    fn seeded(seed: u128, sequence: Option<u128>) -> Self;

    /// Like [`SeededEngine::seeded`] but with a custom LCG multiplier, which
    /// must be of the form `4k + 1` after reduction modulo 2<sup>W</sup>.
    ///
    /// The default multipliers are carefully chosen and well tested; other
    /// values may give poor-quality generators.
    fn with_multiplier(seed: u128, sequence: Option<u128>, multiplier: u128) -> Result<Self, Error>;
}
