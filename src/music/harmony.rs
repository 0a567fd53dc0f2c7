// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Functional harmony roles and melody reinterpretation.
//!
//! Each harmony restricts which pitches are consonant at a point in the
//! phrase. The substitution tables rewrite a tonic melody over the
//! dominant or subdominant by positional lookup on a fixed diatonic
//! domain.

use rand::rngs::StdRng;
use rand::Rng;

use super::scale::{Pitch, TheoryError};

/// Functional harmony roles used across the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Tonic,
    Predominant,
    Dominant,
}

impl Harmony {
    /// The pitches consonant with this harmony, ascending.
    pub fn pitch_set(self) -> &'static [Pitch] {
        match self {
            Harmony::Tonic => &[60, 64, 67],
            Harmony::Predominant => &[60, 62, 65, 69],
            Harmony::Dominant => &[62, 65, 67, 71],
        }
    }

    /// Human-readable role name.
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Tonic => "tonic",
            Harmony::Predominant => "predominant",
            Harmony::Dominant => "dominant",
        }
    }
}

/// Chance that the dominant reinterpretation uses the first table variant.
const DOMINANT_VARIANT_A_PROB: f64 = 0.5;

/// Diatonic pitches the substitution tables are defined over.
///
/// A melody pitch outside this domain cannot be reinterpreted and
/// aborts generation.
pub const SUBSTITUTION_DOMAIN: [Pitch; 21] = [
    43, 45, 47, 48, 50, 52, 53, 55, 57, 59, 60, 62, 64, 65, 67, 69, 71, 72, 74, 76, 77,
];

const DOMINANT_VARIANT_A: [Pitch; 21] = [
    43, 45, 47, 47, 48, 50, 53, 55, 57, 59, 59, 60, 62, 65, 67, 69, 71, 71, 72, 74, 77,
];

// The 50 -> 42 entry breaks the octave while every other entry moves by
// a third or less; carried over verbatim from the curated table so that
// seeded output stays compatible.
const DOMINANT_VARIANT_B: [Pitch; 21] = [
    43, 45, 47, 50, 42, 53, 53, 55, 57, 59, 62, 64, 65, 65, 67, 69, 71, 74, 76, 77, 77,
];

const SUBDOMINANT_TABLE: [Pitch; 21] = [
    45, 45, 47, 48, 50, 53, 55, 57, 57, 59, 60, 62, 65, 67, 69, 69, 71, 72, 74, 77, 77,
];

fn substitute(melody: &[Pitch], table: &[Pitch; 21]) -> Result<Vec<Pitch>, TheoryError> {
    melody
        .iter()
        .map(|&pitch| {
            SUBSTITUTION_DOMAIN
                .iter()
                .position(|&p| p == pitch)
                .map(|index| table[index])
                .ok_or(TheoryError::Substitution { pitch })
        })
        .collect()
}

/// Reinterpret a tonic melody over the dominant harmony.
///
/// Two curated table variants exist; a fair coin picks one for the
/// whole melody.
pub fn to_dominant(melody: &[Pitch], rng: &mut StdRng) -> Result<Vec<Pitch>, TheoryError> {
    let table = if rng.gen::<f64>() < DOMINANT_VARIANT_A_PROB {
        &DOMINANT_VARIANT_A
    } else {
        &DOMINANT_VARIANT_B
    };
    substitute(melody, table)
}

/// Reinterpret a tonic melody over the subdominant harmony.
pub fn to_subdominant(melody: &[Pitch]) -> Result<Vec<Pitch>, TheoryError> {
    substitute(melody, &SUBDOMINANT_TABLE)
}
