// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! CANTUS - procedural four-measure melody generation with MIDI output.
//!
//! The pipeline draws a rhythm and a harmony-constrained melody per
//! measure, corrects the melody with voice-leading passes, sequences
//! four measures into a phrase, and serializes the phrase as a
//! format 0 Standard MIDI File.

pub mod config;
pub mod generators;
pub mod midi;
pub mod music;

pub use config::EngineConfig;
pub use generators::phrase::{Phrase, PhraseGenerator};
pub use midi::MidiWriter;
pub use music::scale::{Pitch, TheoryError};

/// Generate one phrase and render it to MIDI file bytes.
///
/// This is the main entry point for the library. A seed makes the
/// output reproducible; `None` draws from system entropy.
pub fn generate_midi(seed: Option<u64>) -> Result<Vec<u8>, TheoryError> {
    let mut generator = match seed {
        Some(seed) => PhraseGenerator::with_seed(seed),
        None => PhraseGenerator::new(),
    };
    let phrase = generator.generate()?;
    Ok(MidiWriter::new().render(&phrase))
}
