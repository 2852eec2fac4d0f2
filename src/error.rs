// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum ErrorKind {
    /// A bound, count or parameter is outside what the operation accepts:
    /// an empty range, a zero step, a bit count too wide for the result
    /// type, mismatched argument lengths, or an invalid multiplier.
    InvalidArgument,
    /// The weights passed to a weighted selection do not have a strictly
    /// positive, finite total.
    InvalidWeights,
    /// Selection from an empty population.
    EmptyPopulation,
    /// A sample was requested that is larger than its population.
    OutOfDomain,
    /// A state snapshot does not describe a valid state of this generator.
    InvalidState,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidWeights => "invalid weights",
            ErrorKind::EmptyPopulation => "empty population",
            ErrorKind::OutOfDomain => "out of domain",
            ErrorKind::InvalidState => "invalid state",
        }
    }
}

/// Error type of the sampling operations
///
/// This is a relatively simple error type: it embeds a [`ErrorKind`] code
/// and a message (static string only). Every failure is reported at the call
/// which triggered it; no operation ever silently truncates or biases a
/// result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub const fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error { kind, msg }
    }

    pub(crate) const fn invalid_argument(msg: &'static str) -> Self {
        Error::new(ErrorKind::InvalidArgument, msg)
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind.description(), self.msg)
    }
}

impl std::error::Error for Error {}
