// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Standard MIDI file serialization.
//!
//! Renders a phrase as a format 0 file: one track carrying the tempo
//! and time-signature meta events followed by delta-timed
//! note-on/note-off pairs, one pair per phrase slot.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::EngineConfig;
use crate::generators::phrase::Phrase;

/// Writer for format 0 (single track) MIDI files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiWriter {
    /// Ticks per quarter note
    ppqn: u16,
    /// Tempo in microseconds per quarter note
    tempo_micros: u32,
    /// Time signature (numerator, denominator)
    time_sig: (u8, u8),
    /// Note-on velocity
    velocity: u8,
    /// MIDI channel (0-15)
    channel: u8,
}

impl MidiWriter {
    /// Writer with the engine defaults (480 PPQN, 600000 us per
    /// quarter, 4/4, velocity 100, channel 0).
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Writer configured from an [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            ppqn: config.ppqn,
            tempo_micros: config.tempo_micros,
            time_sig: (config.time_signature_num, config.time_signature_den),
            velocity: config.velocity,
            channel: config.channel,
        }
    }

    /// Render a phrase to complete MIDI file bytes.
    pub fn render(&self, phrase: &Phrase) -> Vec<u8> {
        let track = self.track_data(phrase);
        let mut bytes = Vec::with_capacity(14 + 8 + track.len());

        // Header chunk
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes()); // format 0
        bytes.extend_from_slice(&1u16.to_be_bytes()); // single track
        bytes.extend_from_slice(&self.ppqn.to_be_bytes());

        // Track chunk
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&(track.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&track);
        bytes
    }

    /// Write a rendered phrase to `writer`.
    pub fn write<W: Write>(&self, phrase: &Phrase, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.render(phrase))
    }

    /// Write a rendered phrase to a file at `path`.
    pub fn export<P: AsRef<Path>>(&self, phrase: &Phrase, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        self.write(phrase, &mut file)
    }

    /// Build the track body: meta events at time zero, then one
    /// note-on (delta 0) / note-off (delta = slot length) pair per
    /// slot, then end of track.
    fn track_data(&self, phrase: &Phrase) -> Vec<u8> {
        let mut data = Vec::new();

        data.extend_from_slice(&variable_length(0));
        data.extend_from_slice(&self.tempo_event());
        data.extend_from_slice(&variable_length(0));
        data.extend_from_slice(&self.time_signature_event());

        for (pitch, duration) in phrase.slots() {
            data.extend_from_slice(&variable_length(0));
            data.extend_from_slice(&[
                0x90 | (self.channel & 0x0F),
                pitch & 0x7F,
                self.velocity & 0x7F,
            ]);
            data.extend_from_slice(&variable_length(duration.ticks()));
            data.extend_from_slice(&[0x80 | (self.channel & 0x0F), pitch & 0x7F, 0]);
        }

        data.extend_from_slice(&variable_length(0));
        data.extend_from_slice(&[0xFF, 0x2F, 0x00]);
        data
    }

    fn tempo_event(&self) -> [u8; 6] {
        [
            0xFF,
            0x51,
            0x03,
            ((self.tempo_micros >> 16) & 0xFF) as u8,
            ((self.tempo_micros >> 8) & 0xFF) as u8,
            (self.tempo_micros & 0xFF) as u8,
        ]
    }

    fn time_signature_event(&self) -> [u8; 7] {
        // Denominator is expressed as power of 2
        let denom_power = (self.time_sig.1 as f64).log2() as u8;
        [
            0xFF,
            0x58,
            0x04,
            self.time_sig.0,
            denom_power,
            24, // MIDI clocks per metronome click
            8,  // 32nd notes per MIDI quarter note
        ]
    }
}

impl Default for MidiWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a tick count as a variable-length quantity.
fn variable_length(mut value: u32) -> Vec<u8> {
    let mut bytes = vec![(value & 0x7F) as u8];
    value >>= 7;

    while value > 0 {
        bytes.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }

    bytes.reverse();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::rhythm::DurationSymbol::{Half, Quarter, Whole};

    fn two_note_phrase() -> Phrase {
        Phrase::new(vec![60, 67], vec![Half, Half])
    }

    #[test]
    fn test_header_bytes() {
        let bytes = MidiWriter::new().render(&two_note_phrase());
        assert_eq!(&bytes[0..4], b"MThd");
        assert_eq!(&bytes[4..8], &[0, 0, 0, 6]);
        assert_eq!(&bytes[8..10], &0u16.to_be_bytes()); // format 0
        assert_eq!(&bytes[10..12], &1u16.to_be_bytes()); // one track
        assert_eq!(&bytes[12..14], &480u16.to_be_bytes());
        assert_eq!(&bytes[14..18], b"MTrk");
    }

    #[test]
    fn test_track_length_matches_contents() {
        let bytes = MidiWriter::new().render(&two_note_phrase());
        let declared = u32::from_be_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
        assert_eq!(declared as usize, bytes.len() - 22);
    }

    #[test]
    fn test_tempo_event_encodes_600000_micros() {
        let writer = MidiWriter::new();
        // 600000 = 0x0927C0
        assert_eq!(writer.tempo_event(), [0xFF, 0x51, 0x03, 0x09, 0x27, 0xC0]);
    }

    #[test]
    fn test_time_signature_event() {
        let writer = MidiWriter::new();
        assert_eq!(
            writer.time_signature_event(),
            [0xFF, 0x58, 0x04, 4, 2, 24, 8]
        );
    }

    #[test]
    fn test_note_pair_layout() {
        let phrase = Phrase::new(vec![60], vec![Quarter]);
        let writer = MidiWriter::new();
        let track = writer.track_data(&phrase);
        // Skip the two zero-delta meta events (1 + 6 + 1 + 7 bytes).
        let notes = &track[15..];
        assert_eq!(&notes[0..4], &[0x00, 0x90, 60, 100]);
        // 480 ticks as a VLQ is 0x83 0x60.
        assert_eq!(&notes[4..9], &[0x83, 0x60, 0x80, 60, 0]);
        // End of track closes the body.
        assert_eq!(&notes[9..13], &[0x00, 0xFF, 0x2F, 0x00]);
        assert_eq!(notes.len(), 13);
    }

    #[test]
    fn test_note_off_delta_spans_the_duration() {
        let phrase = Phrase::new(vec![72], vec![Whole]);
        let track = MidiWriter::new().track_data(&phrase);
        let notes = &track[15..];
        // 1920 ticks as a VLQ is 0x8F 0x00.
        assert_eq!(&notes[0..4], &[0x00, 0x90, 72, 100]);
        assert_eq!(&notes[4..9], &[0x8F, 0x00, 0x80, 72, 0]);
    }

    #[test]
    fn test_variable_length() {
        assert_eq!(variable_length(0), vec![0x00]);
        assert_eq!(variable_length(127), vec![0x7F]);
        assert_eq!(variable_length(128), vec![0x81, 0x00]);
        assert_eq!(variable_length(240), vec![0x81, 0x70]);
        assert_eq!(variable_length(480), vec![0x83, 0x60]);
        assert_eq!(variable_length(1920), vec![0x8F, 0x00]);
        assert_eq!(variable_length(16383), vec![0xFF, 0x7F]);
    }

    #[test]
    fn test_render_is_reproducible() {
        let phrase = two_note_phrase();
        let writer = MidiWriter::new();
        assert_eq!(writer.render(&phrase), writer.render(&phrase));
    }

    #[test]
    fn test_writer_from_config() {
        let config = EngineConfig {
            velocity: 80,
            channel: 3,
            ..EngineConfig::default()
        };
        let writer = MidiWriter::from_config(&config);
        let phrase = Phrase::new(vec![60], vec![Quarter]);
        let track = writer.track_data(&phrase);
        let notes = &track[15..];
        assert_eq!(&notes[0..4], &[0x00, 0x93, 60, 80]);
    }
}
