// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Engine configuration.
//!
//! Defaults reproduce the fixed generation parameters; a YAML file can
//! override any subset of them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::rhythm::TICKS_PER_QUARTER;

/// Engine-level configuration for generation and serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tempo in microseconds per quarter note
    #[serde(default = "default_tempo_micros")]
    pub tempo_micros: u32,
    /// Note-on velocity (1-127)
    #[serde(default = "default_velocity")]
    pub velocity: u8,
    /// Ticks per quarter note
    #[serde(default = "default_ppqn")]
    pub ppqn: u16,
    /// Time signature numerator
    #[serde(default = "default_time_sig_num")]
    pub time_signature_num: u8,
    /// Time signature denominator
    #[serde(default = "default_time_sig_den")]
    pub time_signature_den: u8,
    /// MIDI channel (0-15)
    #[serde(default)]
    pub channel: u8,
    /// Seed for reproducible generation; omitted = fresh entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output file path
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_tempo_micros() -> u32 {
    600_000
}
fn default_velocity() -> u8 {
    100
}
fn default_ppqn() -> u16 {
    TICKS_PER_QUARTER
}
fn default_time_sig_num() -> u8 {
    4
}
fn default_time_sig_den() -> u8 {
    4
}
fn default_output() -> String {
    "melody.mid".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tempo_micros: default_tempo_micros(),
            velocity: default_velocity(),
            ppqn: default_ppqn(),
            time_signature_num: default_time_sig_num(),
            time_signature_den: default_time_sig_den(),
            channel: 0,
            seed: None,
            output: default_output(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}
