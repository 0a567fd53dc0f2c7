// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Raw melody generation.

use rand::rngs::StdRng;
use rand::Rng;

use crate::music::harmony::Harmony;
use crate::music::rhythm::DurationSymbol;
use crate::music::scale::Pitch;

/// Draw one pitch from the harmony's set for every rhythm slot.
///
/// Draws are independent and uniform; no contour shaping happens here.
/// Smoothness is entirely the voicing passes' job.
pub fn random_melody(
    harmony: Harmony,
    rhythm: &[DurationSymbol],
    rng: &mut StdRng,
) -> Vec<Pitch> {
    let set = harmony.pitch_set();
    rhythm
        .iter()
        .map(|_| set[rng.gen_range(0..set.len())])
        .collect()
}
