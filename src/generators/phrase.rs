// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Four-measure phrase sequencing.
//!
//! Measures follow the fixed harmonic arc tonic -> tonic or substitute
//! -> dominant -> tonic cadence. Each measure's final pitch feeds the
//! next measure's correction logic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::music::harmony::{self, Harmony};
use crate::music::rhythm::{self, DurationSymbol};
use crate::music::scale::{Pitch, TheoryError};

use super::melody::random_melody;
use super::voicing;

/// Chance that the answering measure keeps the tonic melody unchanged.
const KEEP_TONIC_BOUND: f64 = 0.3;
/// Upper bound of the draw range that reinterprets over the dominant;
/// draws above it take the subdominant instead.
const DOMINANT_BOUND: f64 = 0.8;
/// Tonic pitch closing the phrase.
const FINAL_TONIC: Pitch = 60;
/// Upper tonic reached when the cadence ends on a leading degree.
const FINAL_TONIC_UPPER: Pitch = 72;
/// Cadence degrees that resolve upward to [`FINAL_TONIC_UPPER`].
const LEADING_DEGREES: [Pitch; 2] = [71, 74];

/// A finished four-measure phrase: aligned pitch and rhythm sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    notes: Vec<Pitch>,
    rhythm: Vec<DurationSymbol>,
}

impl Phrase {
    /// Assemble a phrase from aligned pitch and rhythm sequences.
    pub fn new(notes: Vec<Pitch>, rhythm: Vec<DurationSymbol>) -> Self {
        debug_assert_eq!(notes.len(), rhythm.len());
        Self { notes, rhythm }
    }

    /// The pitch sequence.
    pub fn notes(&self) -> &[Pitch] {
        &self.notes
    }

    /// The rhythm sequence.
    pub fn rhythm(&self) -> &[DurationSymbol] {
        &self.rhythm
    }

    /// Number of note slots.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the phrase has no slots.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterate aligned (pitch, duration) slots.
    pub fn slots(&self) -> impl Iterator<Item = (Pitch, DurationSymbol)> + '_ {
        self.notes
            .iter()
            .copied()
            .zip(self.rhythm.iter().copied())
    }

    /// Total duration in ticks.
    pub fn total_ticks(&self) -> u32 {
        self.rhythm.iter().map(|d| d.ticks()).sum()
    }
}

/// Builds four-measure phrases from a single owned random source.
///
/// The generator is re-entrant: every `generate` call threads measure
/// state through as ordinary values and produces an independent phrase
/// from the RNG stream.
pub struct PhraseGenerator {
    rng: StdRng,
}

impl PhraseGenerator {
    /// Generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed; identical seeds yield identical
    /// phrases.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one phrase.
    pub fn generate(&mut self) -> Result<Phrase, TheoryError> {
        let (m1_notes, m1_rhythm) = self.opening_measure()?;
        debug!(notes = ?m1_notes, "opening measure");

        let m2_notes = self.answering_measure(&m1_notes)?;
        let m2_rhythm = m1_rhythm.clone();
        debug!(notes = ?m2_notes, "answering measure");
        let m2_last = *m2_notes.last().expect("rhythm pool entries are never empty");

        let (m3_notes, m3_rhythm) = self.cadential_measure(m2_last)?;
        debug!(notes = ?m3_notes, "cadential measure");
        let m3_last = *m3_notes.last().expect("rhythm pool entries are never empty");

        let (m4_notes, m4_rhythm) = final_measure(m3_last);

        let mut notes = m1_notes;
        notes.extend_from_slice(&m2_notes);
        notes.extend_from_slice(&m3_notes);
        notes.extend_from_slice(&m4_notes);
        let mut pattern = m1_rhythm;
        pattern.extend_from_slice(&m2_rhythm);
        pattern.extend_from_slice(&m3_rhythm);
        pattern.extend_from_slice(&m4_rhythm);

        Ok(Phrase::new(notes, pattern))
    }

    /// Opening measure: a corrected tonic melody on a pool-A rhythm.
    fn opening_measure(&mut self) -> Result<(Vec<Pitch>, Vec<DurationSymbol>), TheoryError> {
        let pattern = rhythm::opening_pattern(&mut self.rng);
        let mut notes = random_melody(Harmony::Tonic, pattern, &mut self.rng);
        voicing::insert_neighbor_tones(&mut notes, &mut self.rng)?;
        voicing::limit_leaps(&mut notes, &mut self.rng);
        voicing::insert_passing_tones(&mut notes, &mut self.rng)?;
        Ok((notes, pattern.to_vec()))
    }

    /// Answering measure: the opening melody kept on the tonic or
    /// reinterpreted over the dominant or subdominant. The rhythm is
    /// reused as-is.
    fn answering_measure(&mut self, opening: &[Pitch]) -> Result<Vec<Pitch>, TheoryError> {
        let draw = self.rng.gen::<f64>();
        if draw <= KEEP_TONIC_BOUND {
            Ok(opening.to_vec())
        } else if draw <= DOMINANT_BOUND {
            harmony::to_dominant(opening, &mut self.rng)
        } else {
            harmony::to_subdominant(opening)
        }
    }

    /// Cadential measure: a dominant melody on a pool-B rhythm, smoothed
    /// against the previous measure and resolved onto a pre-tonic degree.
    fn cadential_measure(
        &mut self,
        answer_last: Pitch,
    ) -> Result<(Vec<Pitch>, Vec<DurationSymbol>), TheoryError> {
        let pattern = rhythm::cadential_pattern(&mut self.rng);
        let mut notes = random_melody(Harmony::Dominant, pattern, &mut self.rng);
        notes[0] = voicing::smooth_measure_boundary(answer_last, notes[0]);
        voicing::resolve_cadence(&mut notes, &mut self.rng);
        voicing::limit_leaps(&mut notes, &mut self.rng);
        voicing::remove_tritones(&mut notes);
        voicing::insert_neighbor_tones(&mut notes, &mut self.rng)?;
        voicing::insert_passing_tones(&mut notes, &mut self.rng)?;
        Ok((notes, pattern.to_vec()))
    }
}

impl Default for PhraseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The closing whole-note measure, fixed by the cadence's final pitch:
/// a leading degree resolves up to the higher tonic, anything else
/// lands on middle C.
fn final_measure(cadence_last: Pitch) -> (Vec<Pitch>, Vec<DurationSymbol>) {
    let pitch = if LEADING_DEGREES.contains(&cadence_last) {
        FINAL_TONIC_UPPER
    } else {
        FINAL_TONIC
    };
    (vec![pitch], vec![DurationSymbol::Whole])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::rhythm::TICKS_PER_MEASURE;

    #[test]
    fn test_final_measure_resolution() {
        assert_eq!(final_measure(71).0, vec![72]);
        assert_eq!(final_measure(74).0, vec![72]);
        assert_eq!(final_measure(60).0, vec![60]);
        assert_eq!(final_measure(67).0, vec![60]);
        assert_eq!(final_measure(62).0, vec![60]);
    }

    #[test]
    fn test_final_measure_is_one_whole_note() {
        let (notes, pattern) = final_measure(71);
        assert_eq!(notes.len(), 1);
        assert_eq!(pattern, vec![DurationSymbol::Whole]);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let first = PhraseGenerator::with_seed(42).generate();
        let second = PhraseGenerator::with_seed(42).generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_phrase_shape() {
        let mut found = 0;
        for seed in 0..40 {
            let Ok(phrase) = PhraseGenerator::with_seed(seed).generate() else {
                // A few seeds push a pitch off the substitution domain
                // or the scale ladder, which aborts generation.
                continue;
            };
            found += 1;
            assert_eq!(phrase.notes().len(), phrase.rhythm().len());
            assert_eq!(phrase.total_ticks(), 4 * TICKS_PER_MEASURE);
            assert_eq!(phrase.rhythm().last(), Some(&DurationSymbol::Whole));
            let last = *phrase.notes().last().unwrap();
            assert!(last == 60 || last == 72);
        }
        assert!(found > 20, "only {} of 40 seeds produced a phrase", found);
    }

    #[test]
    fn test_phrase_slots_align() {
        let phrase = Phrase::new(
            vec![60, 62],
            vec![DurationSymbol::Half, DurationSymbol::Half],
        );
        let slots: Vec<_> = phrase.slots().collect();
        assert_eq!(
            slots,
            vec![(60, DurationSymbol::Half), (62, DurationSymbol::Half)]
        );
        assert_eq!(phrase.total_ticks(), TICKS_PER_MEASURE);
        assert!(!phrase.is_empty());
        assert_eq!(phrase.len(), 2);
    }

    #[test]
    fn test_generator_is_reentrant() {
        // Consecutive calls on one generator draw fresh state instead
        // of replaying hidden globals.
        let mut generator = PhraseGenerator::with_seed(9);
        let first = generator.generate();
        let second = generator.generate();
        let mut replay = PhraseGenerator::with_seed(9);
        assert_eq!(first, replay.generate());
        assert_eq!(second, replay.generate());
    }

    #[test]
    fn test_all_answering_paths_are_reachable() {
        // Across many seeds the answering measure must sometimes keep
        // the opening verbatim and sometimes rewrite it.
        let mut kept = 0;
        let mut rewritten = 0;
        for seed in 0..60 {
            let Ok(phrase) = PhraseGenerator::with_seed(seed).generate() else {
                continue;
            };
            let measure_len = (phrase.len() - 1 - count_cadential(&phrase)) / 2;
            let (m1, m2) = (
                &phrase.notes()[..measure_len],
                &phrase.notes()[measure_len..2 * measure_len],
            );
            if m1 == m2 {
                kept += 1;
            } else {
                rewritten += 1;
            }
        }
        assert!(kept > 0);
        assert!(rewritten > 0);
    }

    fn count_cadential(phrase: &Phrase) -> usize {
        // Walk the rhythm back from the final whole note until one
        // measure's worth of ticks is consumed.
        let mut ticks = 0;
        let mut slots = 0;
        for duration in phrase.rhythm()[..phrase.len() - 1].iter().rev() {
            ticks += duration.ticks();
            slots += 1;
            if ticks == TICKS_PER_MEASURE {
                break;
            }
        }
        slots
    }
}
