// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::sexagenary::SolarTerm;
use serde::Serialize;

/// A solar term and its distance in days from the birth day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermBoundary {
    /// The solar term.
    pub term: SolarTerm,
    /// Whole days between the birth day and the term's day.
    pub days: u32,
}

impl TermBoundary {
    /// Creates a new `TermBoundary`.
    #[must_use]
    pub const fn new(term: SolarTerm, days: u32) -> Self {
        Self { term, days }
    }
}

/// The solar terms surrounding a birth day.
///
/// A term falling on the birth day itself is reported on both sides with a
/// distance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTermWindow {
    /// Nearest term on or before the birth day.
    pub previous: TermBoundary,
    /// Nearest term on or after the birth day.
    pub next: TermBoundary,
}
