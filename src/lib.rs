// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reproducible PCG random number generators with a random-module style
//! sampling API.
//!
//! This crate provides six [PCG generators] and, on top of them, the
//! sampling operations of a conventional general-purpose random module:
//! ranged integers, floats, choosing, sampling without replacement,
//! weighted choices and shuffling. Integer-valued results are bit-for-bit
//! reproducible across platforms and releases.
//!
//! ## Engines
//!
//! The [`pcg`] module provides the XSH-RR and XSH-RS generators (64-bit
//! state, 32-bit output) and the XSL-RR generator (128-bit state, 64-bit
//! output), each with a per-instance stream ([`pcg::SetSeq`]) or a single
//! shared stream ([`pcg::OneSeq`]). They reproduce the PCG reference engines
//! exactly, and support jumping forwards and backwards in logarithmic time.
//!
//! Engines implement [`RngCore`] and [`SeedableRng`], so they can be used
//! wherever a `rand_core` generator is expected.
//!
//! ## Sampling
//!
//! [`Generator`] wraps an engine and provides the sampling API:
//!
//! ```
//! use pcgrandom::Generator;
//! use pcgrandom::pcg::SetseqXshRr6432;
//!
//! let mut gen = Generator::<SetseqXshRr6432>::with_seed(54321);
//! let values: Vec<i128> = (0..10).map(|_| gen.randrange(100, None, 1).unwrap()).collect();
//! assert_eq!(values, [92, 30, 84, 96, 4, 69, 87, 21, 39, 79]);
//! ```
//!
//! The same operations are available as free functions over any
//! [`pcg::RawSource`] in [`ranged`], and as the [`seq::SliceRandom`]
//! extension trait on slices.
//!
//! ## Reproducibility
//!
//! Each operation consumes an amount of engine output that depends only on
//! its arguments and the values drawn. `random`, `uniform` and weighted
//! `choices` always consume the same amount of output, but their float
//! results may differ in the last bit between platforms.
//!
//! [PCG generators]: https://www.pcg-random.org/
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#[macro_use]
mod log_macros;

mod error;
pub mod fingerprint;
mod generator;
pub mod pcg;
pub mod ranged;
pub mod reference;
mod seed;
pub mod seq;

pub use rand_core;

pub use crate::error::{Error, ErrorKind};
pub use crate::fingerprint::{fingerprint, Fingerprint};
pub use crate::generator::{Generator, GeneratorState};
pub use crate::pcg::{AnyEngine, EngineKind};
pub use crate::seed::SeedValue;
