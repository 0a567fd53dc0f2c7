// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Voice-leading correction passes.
//!
//! Each pass rewrites pitches of a melody in place and never changes
//! its length. The phrase sequencer applies them in a fixed order; the
//! passes are not commutative.

use rand::rngs::StdRng;
use rand::Rng;

use crate::music::scale::{self, Pitch, TheoryError};

/// Largest adjacent interval (semitones) the leap limiter accepts.
pub const LEAP_LIMIT: u8 = 7;
/// Chance that an exact perfect-fifth leap is octave-folded anyway.
pub const FIFTH_FOLD_PROB: f64 = 0.2;
/// Chance that an eligible middle note becomes a passing tone.
pub const PASSING_PROB: f64 = 0.7;
/// Chance that the middle of a repeated-note triple becomes a neighbor tone.
pub const NEIGHBOR_PROB: f64 = 0.4;
/// Chance that an inserted neighbor lies above the repeated pitch.
pub const NEIGHBOR_UPPER_PROB: f64 = 0.3;
/// Widest seam (semitones) tolerated between consecutive measures.
pub const BOUNDARY_LIMIT: u8 = 6;
/// Scale degrees that resolve to the tonic by step.
pub const PRE_TONIC: [Pitch; 2] = [62, 71];

/// Octave-shift `pitch` toward `anchor`.
fn fold_toward(anchor: Pitch, pitch: Pitch) -> Pitch {
    if anchor > pitch {
        pitch + 12
    } else {
        pitch - 12
    }
}

/// Octave-fold any adjacent interval wider than a perfect fifth.
///
/// Left to right; a fold changes the interval the next pair sees. An
/// exact fifth survives most of the time but is folded with
/// [`FIFTH_FOLD_PROB`].
pub fn limit_leaps(melody: &mut [Pitch], rng: &mut StdRng) {
    for i in 1..melody.len() {
        let prev = melody[i - 1];
        if prev.abs_diff(melody[i]) > LEAP_LIMIT {
            melody[i] = fold_toward(prev, melody[i]);
        }
        if prev.abs_diff(melody[i]) == LEAP_LIMIT && rng.gen::<f64>() < FIFTH_FOLD_PROB {
            melody[i] = fold_toward(prev, melody[i]);
        }
    }
}

/// Resolve every adjacent tritone.
///
/// The member whose pitch class is F is raised two semitones, first
/// pitch checked first. In a diatonic melody the tritone always
/// involves F, so the pass leaves no six-semitone pair behind.
pub fn remove_tritones(melody: &mut [Pitch]) {
    for i in 1..melody.len() {
        if melody[i - 1].abs_diff(melody[i]) == 6 {
            if melody[i - 1] % 12 == 5 {
                melody[i - 1] += 2;
            } else if melody[i] % 12 == 5 {
                melody[i] += 2;
            }
        }
    }
}

/// Fill thirds with passing tones.
///
/// When the outer notes of a triple lie a third apart (3 or 4
/// semitones), the middle note becomes the diatonic step from the first
/// note toward the third, with [`PASSING_PROB`].
pub fn insert_passing_tones(melody: &mut [Pitch], rng: &mut StdRng) -> Result<(), TheoryError> {
    for i in 0..melody.len().saturating_sub(2) {
        let outer = melody[i].abs_diff(melody[i + 2]);
        if (outer == 3 || outer == 4) && rng.gen::<f64>() < PASSING_PROB {
            melody[i + 1] = if melody[i] > melody[i + 2] {
                scale::step_down(melody[i])?
            } else {
                scale::step_up(melody[i])?
            };
        }
    }
    Ok(())
}

/// Decorate repeated notes with neighbor tones.
///
/// When the outer notes of a triple are equal, the middle note becomes
/// a diatonic neighbor with [`NEIGHBOR_PROB`]; the neighbor lies below
/// unless the [`NEIGHBOR_UPPER_PROB`] draw fires.
pub fn insert_neighbor_tones(melody: &mut [Pitch], rng: &mut StdRng) -> Result<(), TheoryError> {
    for i in 0..melody.len().saturating_sub(2) {
        if melody[i] == melody[i + 2] && rng.gen::<f64>() < NEIGHBOR_PROB {
            melody[i + 1] = if rng.gen::<f64>() < NEIGHBOR_UPPER_PROB {
                scale::step_up(melody[i])?
            } else {
                scale::step_down(melody[i])?
            };
        }
    }
    Ok(())
}

/// Force the final note of the cadential measure onto a pre-tonic degree.
///
/// A note already in [`PRE_TONIC`] is kept; otherwise a coin flip picks
/// one of the two degrees.
pub fn resolve_cadence(melody: &mut [Pitch], rng: &mut StdRng) {
    if let Some(last) = melody.last_mut() {
        if !PRE_TONIC.contains(last) {
            *last = PRE_TONIC[rng.gen_range(0..PRE_TONIC.len())];
        }
    }
}

/// Pull a measure's first note toward the previous measure's final note
/// when the seam spans more than [`BOUNDARY_LIMIT`] semitones.
pub fn smooth_measure_boundary(prev_last: Pitch, first: Pitch) -> Pitch {
    if prev_last.abs_diff(first) > BOUNDARY_LIMIT {
        fold_toward(prev_last, first)
    } else {
        first
    }
}
