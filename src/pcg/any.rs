// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run-time engine selection

use super::engines::{
    OneseqXshRr6432, OneseqXshRs6432, OneseqXslRr12864, SetseqXshRr6432, SetseqXshRs6432,
    SetseqXslRr12864,
};
use super::{EngineState, PcgEngine, RawSource, SeededEngine, Variant};
use crate::error::Error;
use core::fmt;
use core::str::FromStr;

/// Names one of the six engine variants.
///
/// Parses from the reference engine name (`"setseq_xsh_rr_64_32"`, ...)
/// or, for the set-sequence variants, from the family name alone
/// (`"XSH-RR"`, `"XSH-RS"`, `"XSL-RR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// [`SetseqXshRr6432`]
    SetseqXshRr6432,
    /// [`OneseqXshRr6432`]
    OneseqXshRr6432,
    /// [`SetseqXshRs6432`]
    SetseqXshRs6432,
    /// [`OneseqXshRs6432`]
    OneseqXshRs6432,
    /// [`SetseqXslRr12864`]
    SetseqXslRr12864,
    /// [`OneseqXslRr12864`]
    OneseqXslRr12864,
}

impl EngineKind {
    /// Every kind, in reference test-vector order.
    pub const ALL: [EngineKind; 6] = [
        EngineKind::SetseqXshRr6432,
        EngineKind::OneseqXshRr6432,
        EngineKind::SetseqXshRs6432,
        EngineKind::OneseqXshRs6432,
        EngineKind::SetseqXslRr12864,
        EngineKind::OneseqXslRr12864,
    ];

    /// The variant descriptor of this kind.
    pub fn variant(self) -> Variant {
        match self {
            EngineKind::SetseqXshRr6432 => SetseqXshRr6432::VARIANT,
            EngineKind::OneseqXshRr6432 => OneseqXshRr6432::VARIANT,
            EngineKind::SetseqXshRs6432 => SetseqXshRs6432::VARIANT,
            EngineKind::OneseqXshRs6432 => OneseqXshRs6432::VARIANT,
            EngineKind::SetseqXslRr12864 => SetseqXslRr12864::VARIANT,
            EngineKind::OneseqXslRr12864 => OneseqXslRr12864::VARIANT,
        }
    }

    /// The reference engine name, e.g. `"oneseq_xsh_rs_64_32"`.
    pub fn name(self) -> &'static str {
        self.variant().name
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "XSH-RR" => return Ok(EngineKind::SetseqXshRr6432),
            "XSH-RS" => return Ok(EngineKind::SetseqXshRs6432),
            "XSL-RR" => return Ok(EngineKind::SetseqXslRr12864),
            _ => {}
        }
        EngineKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::invalid_argument("unknown PCG engine name"))
    }
}

/// Any of the six engines, chosen at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEngine {
    #[allow(missing_docs)]
    SetseqXshRr6432(SetseqXshRr6432),
    #[allow(missing_docs)]
    OneseqXshRr6432(OneseqXshRr6432),
    #[allow(missing_docs)]
    SetseqXshRs6432(SetseqXshRs6432),
    #[allow(missing_docs)]
    OneseqXshRs6432(OneseqXshRs6432),
    #[allow(missing_docs)]
    SetseqXslRr12864(SetseqXslRr12864),
    #[allow(missing_docs)]
    OneseqXslRr12864(OneseqXslRr12864),
}

macro_rules! dispatch {
    ($self:expr, $e:ident => $body:expr) => {
        match $self {
            AnyEngine::SetseqXshRr6432($e) => $body,
            AnyEngine::OneseqXshRr6432($e) => $body,
            AnyEngine::SetseqXshRs6432($e) => $body,
            AnyEngine::OneseqXshRs6432($e) => $body,
            AnyEngine::SetseqXslRr12864($e) => $body,
            AnyEngine::OneseqXslRr12864($e) => $body,
        }
    };
}

impl AnyEngine {
    /// Construct an engine of the given kind; see [`SeededEngine::seeded`].
    pub fn new(kind: EngineKind, seed: u128, sequence: Option<u128>) -> Self {
        match kind {
            EngineKind::SetseqXshRr6432 => {
                AnyEngine::SetseqXshRr6432(SeededEngine::seeded(seed, sequence))
            }
            EngineKind::OneseqXshRr6432 => {
                AnyEngine::OneseqXshRr6432(SeededEngine::seeded(seed, sequence))
            }
            EngineKind::SetseqXshRs6432 => {
                AnyEngine::SetseqXshRs6432(SeededEngine::seeded(seed, sequence))
            }
            EngineKind::OneseqXshRs6432 => {
                AnyEngine::OneseqXshRs6432(SeededEngine::seeded(seed, sequence))
            }
            EngineKind::SetseqXslRr12864 => {
                AnyEngine::SetseqXslRr12864(SeededEngine::seeded(seed, sequence))
            }
            EngineKind::OneseqXslRr12864 => {
                AnyEngine::OneseqXslRr12864(SeededEngine::seeded(seed, sequence))
            }
        }
    }

    /// The kind of the contained engine.
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyEngine::SetseqXshRr6432(_) => EngineKind::SetseqXshRr6432,
            AnyEngine::OneseqXshRr6432(_) => EngineKind::OneseqXshRr6432,
            AnyEngine::SetseqXshRs6432(_) => EngineKind::SetseqXshRs6432,
            AnyEngine::OneseqXshRs6432(_) => EngineKind::OneseqXshRs6432,
            AnyEngine::SetseqXslRr12864(_) => EngineKind::SetseqXslRr12864,
            AnyEngine::OneseqXslRr12864(_) => EngineKind::OneseqXslRr12864,
        }
    }
}

impl RawSource for AnyEngine {
    #[inline]
    fn output_bits(&self) -> u32 {
        dispatch!(self, e => e.output_bits())
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        dispatch!(self, e => e.next_raw())
    }
}

impl PcgEngine for AnyEngine {
    fn variant(&self) -> Variant {
        self.kind().variant()
    }

    fn seed(&mut self, seed: u128) {
        dispatch!(self, e => e.seed(seed))
    }

    fn jumpahead(&mut self, delta: i128) {
        dispatch!(self, e => e.jumpahead(delta))
    }

    fn snapshot(&self) -> EngineState {
        dispatch!(self, e => e.snapshot())
    }

    fn restore(&mut self, state: &EngineState) -> Result<(), Error> {
        dispatch!(self, e => e.restore(state))
    }
}
