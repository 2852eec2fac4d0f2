// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pcgrandom::pcg::{PcgEngine, RawSource};
use pcgrandom::{AnyEngine, EngineKind, Generator};

fn engines() -> Vec<AnyEngine> {
    EngineKind::ALL
        .iter()
        .map(|&kind| AnyEngine::new(kind, 12345, Some(24)))
        .collect()
}

#[test]
fn test_jumpahead_matches_drawing() {
    for mut engine in engines() {
        let mut drawn = engine.clone();
        for _ in 0..1000 {
            drawn.next_raw();
        }
        engine.jumpahead(1000);
        assert_eq!(engine, drawn, "{}", engine.kind());
        assert_eq!(engine.next_raw(), drawn.next_raw());
    }
}

#[test]
fn test_jumpahead_composes() {
    let deltas: [i128; 7] = [0, 1, -1, 1000, -12345, 1 << 70, -(1 << 100)];
    for engine in engines() {
        for &d1 in &deltas {
            for &d2 in &deltas {
                let mut twice = engine.clone();
                twice.jumpahead(d1);
                twice.jumpahead(d2);
                let mut once = engine.clone();
                once.jumpahead(d1 + d2);
                assert_eq!(twice.snapshot(), once.snapshot(), "{} {} {}", engine.kind(), d1, d2);
            }
        }
    }
}

#[test]
fn test_rewind_replays_outputs() {
    for mut engine in engines() {
        let first: Vec<u64> = (0..50).map(|_| engine.next_raw()).collect();
        engine.jumpahead(-50);
        let again: Vec<u64> = (0..50).map(|_| engine.next_raw()).collect();
        assert_eq!(first, again, "{}", engine.kind());
    }
}

#[test]
fn test_jumpahead_wraps_at_period() {
    let mut gen = Generator::<pcgrandom::pcg::SetseqXshRr6432>::new(1, 2);
    let start = gen.getstate();
    gen.jumpahead(1 << 64);
    assert_eq!(gen.getstate(), start);
    gen.jumpahead(-(1 << 64) - 3);
    gen.jumpahead(3);
    assert_eq!(gen.getstate(), start);

    let mut gen = Generator::<pcgrandom::pcg::OneseqXslRr12864>::with_seed(1);
    let start = gen.getstate();
    gen.jumpahead(i128::MAX);
    gen.jumpahead(i128::MAX);
    gen.jumpahead(2);
    assert_eq!(gen.getstate(), start);
}

#[test]
fn test_jumpahead_keeps_samplers_in_step() {
    // draws of known size can be skipped
    let mut a = Generator::<pcgrandom::pcg::SetseqXshRs6432>::new(9, 9);
    let mut b = a.clone();
    for _ in 0..7 {
        a.random();
    }
    b.jumpahead(14);
    assert_eq!(a.getrandbits(32), b.getrandbits(32));
}
