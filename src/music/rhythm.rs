// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Duration symbols and the curated rhythm pools.
//!
//! A rhythm pattern is an ordered run of duration symbols filling
//! exactly one 4/4 measure. The opening and cadential measures draw
//! from separate pools.

use rand::rngs::StdRng;
use rand::Rng;

/// Ticks per quarter note (the MIDI division used throughout).
pub const TICKS_PER_QUARTER: u16 = 480;

/// Ticks in one 4/4 measure.
pub const TICKS_PER_MEASURE: u32 = 1920;

/// Note duration symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSymbol {
    Whole,
    Half,
    DottedQuarter,
    Quarter,
    Eighth,
}

impl DurationSymbol {
    /// Tick length at 480 ticks per quarter note.
    pub fn ticks(self) -> u32 {
        match self {
            DurationSymbol::Whole => 1920,
            DurationSymbol::Half => 960,
            DurationSymbol::DottedQuarter => 720,
            DurationSymbol::Quarter => 480,
            DurationSymbol::Eighth => 240,
        }
    }
}

use DurationSymbol::{DottedQuarter, Eighth, Half, Quarter};

/// Patterns for the opening measure. Every entry sums to one measure;
/// any edit to the pool must preserve that.
pub const OPENING_PATTERNS: [&[DurationSymbol]; 11] = [
    &[Half, Half],
    &[Half, Quarter, Quarter],
    &[Quarter, Quarter, Half],
    &[Quarter, Quarter, Quarter, Quarter],
    &[Quarter, Quarter, Eighth, Eighth, Eighth, Eighth],
    &[Eighth, Eighth, Eighth, Eighth, Quarter, Quarter],
    &[Half, Eighth, Eighth, Eighth, Eighth],
    &[DottedQuarter, Eighth, DottedQuarter, Eighth],
    &[Half, DottedQuarter, Eighth],
    &[DottedQuarter, Eighth, Quarter, Eighth, Eighth],
    &[Quarter, Quarter, DottedQuarter, Eighth],
];

/// Patterns for the cadential measure.
pub const CADENTIAL_PATTERNS: [&[DurationSymbol]; 7] = [
    &[Quarter, Quarter, Quarter, Quarter],
    &[Quarter, Quarter, Eighth, Eighth, Eighth, Eighth],
    &[Eighth, Eighth, Eighth, Eighth, Quarter, Quarter],
    &[Quarter, Quarter, Quarter, Eighth, Eighth],
    &[Eighth, Eighth, Quarter, Eighth, Eighth, Eighth, Eighth],
    &[DottedQuarter, Eighth, Quarter, Quarter],
    &[DottedQuarter, Eighth, Eighth, Eighth, Eighth, Eighth],
];

/// Pick an opening-measure pattern uniformly at random.
pub fn opening_pattern(rng: &mut StdRng) -> &'static [DurationSymbol] {
    OPENING_PATTERNS[rng.gen_range(0..OPENING_PATTERNS.len())]
}

/// Pick a cadential-measure pattern uniformly at random.
pub fn cadential_pattern(rng: &mut StdRng) -> &'static [DurationSymbol] {
    CADENTIAL_PATTERNS[rng.gen_range(0..CADENTIAL_PATTERNS.len())]
}
