// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative pipeline for the four-measure phrase.
//!
//! Raw melodies are drawn per measure, corrected by the voicing passes,
//! and assembled by the phrase sequencer.

pub mod melody;
pub mod phrase;
pub mod voicing;
