// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reference test vectors
//!
//! The format cross-checks the engines against the PCG reference engines:
//! for each variant, its first raw outputs as `0x`-prefixed lower-case
//! hexadecimal zero-padded to the output width, one per line, with a blank
//! line between variants.
//!
//! Set-sequence variants are seeded with seed 42 and sequence 54, and
//! single-stream variants with seed 123.

use std::io;

use crate::pcg::{AnyEngine, EngineKind, RawSource, StreamKind};

/// Number of outputs per variant.
pub const OUTPUTS_PER_VARIANT: usize = 32;

/// The engine whose outputs make up the vectors for `kind`.
pub fn reference_engine(kind: EngineKind) -> AnyEngine {
    match kind.variant().stream {
        StreamKind::SetSeq => AnyEngine::new(kind, 42, Some(54)),
        StreamKind::OneSeq => AnyEngine::new(kind, 123, None),
    }
}

/// Format the first `count` raw outputs of `engine`, one per line.
pub fn format_outputs<R: RawSource + ?Sized>(engine: &mut R, count: usize) -> Vec<String> {
    let width = 2 + engine.output_bits() as usize / 4;
    (0..count)
        .map(|_| format!("{:#0width$x}", engine.next_raw(), width = width))
        .collect()
}

/// Write the vectors for every variant, in [`EngineKind::ALL`] order.
pub fn write_reference_vectors<W: io::Write>(out: &mut W) -> io::Result<()> {
    for (i, kind) in EngineKind::ALL.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let mut engine = reference_engine(*kind);
        for line in format_outputs(&mut engine, OUTPUTS_PER_VARIANT) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// The vectors for every variant, as one string.
pub fn reference_vectors() -> String {
    let mut out = Vec::new();
    // writing to a Vec cannot fail, and every line is ASCII
    let _ = write_reference_vectors(&mut out);
    String::from_utf8_lossy(&out).into_owned()
}
