// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scale navigation for the fixed key of C major.
//!
//! The generator works on a two-octave ladder of scale members around
//! middle C. Stepwise motion (passing and neighbor tones) is a lookup
//! on this ladder, never general transposition.

use thiserror::Error;

/// MIDI note number type (0-127)
pub type Pitch = u8;

/// Errors raised when a pitch falls outside the fixed lookup tables.
///
/// These indicate a malformed table or an out-of-domain pitch reaching
/// a lookup; generation aborts rather than producing a partially
/// corrected melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Pitch is not on the diatonic ladder, or the step would walk off
    /// its end.
    #[error("pitch {pitch} has no diatonic step in the scale ladder")]
    ScaleLookup { pitch: Pitch },

    /// Pitch is outside the harmonic substitution domain.
    #[error("pitch {pitch} has no harmonic substitution")]
    Substitution { pitch: Pitch },
}

/// C major scale members from G2 through G5, ascending.
///
/// `step_up` and `step_down` move one position along this ladder.
pub const DIATONIC_LADDER: [Pitch; 22] = [
    43, 45, 47, 48, 50, 52, 53, 55, 57, 59, 60, 62, 64, 65, 67, 69, 71, 72, 74, 76, 77, 79,
];

fn ladder_index(pitch: Pitch) -> Result<usize, TheoryError> {
    DIATONIC_LADDER
        .iter()
        .position(|&p| p == pitch)
        .ok_or(TheoryError::ScaleLookup { pitch })
}

/// The scale member one diatonic step below `pitch`.
pub fn step_down(pitch: Pitch) -> Result<Pitch, TheoryError> {
    let index = ladder_index(pitch)?;
    index
        .checked_sub(1)
        .map(|below| DIATONIC_LADDER[below])
        .ok_or(TheoryError::ScaleLookup { pitch })
}

/// The scale member one diatonic step above `pitch`.
pub fn step_up(pitch: Pitch) -> Result<Pitch, TheoryError> {
    DIATONIC_LADDER
        .get(ladder_index(pitch)? + 1)
        .copied()
        .ok_or(TheoryError::ScaleLookup { pitch })
}
