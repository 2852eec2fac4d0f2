// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Chi-squared checks that every ordered sample is equally likely.

use std::collections::HashMap;

use pcgrandom::{EngineKind, Generator};

// 99.9% points of the chi-squared distribution, by degrees of freedom.
const CHISQ_999_23: f64 = 49.73;
const CHISQ_999_59: f64 = 98.32;

fn falling_factorial(n: usize, k: usize) -> usize {
    (n - k + 1..=n).product()
}

/// Draw `trials` samples of `amount` from `0..length`, one per sequence
/// number, and return the chi-squared statistic over all orderings.
fn sample_chisq(kind: EngineKind, length: usize, amount: usize, trials: u128) -> f64 {
    let mut counts: HashMap<Vec<usize>, u64> = HashMap::new();
    for sequence in 0..trials {
        let mut gen = Generator::with_kind(kind, 12345, Some(sequence));
        let sample = gen.sample_indices(length, amount).unwrap();
        *counts.entry(sample).or_insert(0) += 1;
    }

    let cells = falling_factorial(length, amount);
    assert_eq!(counts.len(), cells, "some orderings never occurred");
    let expected = trials as f64 / cells as f64;
    counts
        .values()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn partial_samples_uniform() {
    for kind in [
        EngineKind::SetseqXshRr6432,
        EngineKind::SetseqXshRs6432,
        EngineKind::SetseqXslRr12864,
    ] {
        let chisq = sample_chisq(kind, 5, 3, 6000);
        assert!(chisq < CHISQ_999_59, "{}: {}", kind, chisq);
    }
}

#[test]
fn full_permutations_uniform() {
    for kind in [
        EngineKind::SetseqXshRr6432,
        EngineKind::SetseqXshRs6432,
        EngineKind::SetseqXslRr12864,
    ] {
        let chisq = sample_chisq(kind, 4, 4, 4800);
        assert!(chisq < CHISQ_999_23, "{}: {}", kind, chisq);
    }
}

#[test]
fn samples_distinct_and_in_range() {
    let mut gen = Generator::with_kind(EngineKind::OneseqXslRr12864, 1, None);
    for length in 0..30 {
        for amount in 0..=length {
            let sample = gen.sample_indices(length, amount).unwrap();
            assert_eq!(sample.len(), amount);
            let mut seen = vec![false; length];
            for &i in &sample {
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }
}

#[test]
fn weighted_frequencies() {
    // weights 1 : 2 : 3 : 4 over 100_000 draws
    let mut gen = Generator::with_kind(EngineKind::SetseqXslRr12864, 5, Some(6));
    let population = [0usize, 1, 2, 3];
    let picks = gen
        .choices(&population, Some(&[1.0, 2.0, 3.0, 4.0][..]), None, 100_000)
        .unwrap();
    let mut counts = [0f64; 4];
    for &i in picks {
        counts[i] += 1.0;
    }
    let chisq: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let expected = 10_000.0 * (i + 1) as f64;
            (c - expected) * (c - expected) / expected
        })
        .sum();
    // 3 degrees of freedom, 99.9% point
    assert!(chisq < 16.27, "{:?}", counts);
}
