// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::process;

use anyhow::{Context, Result};
use tracing::info;

use cantus::config::EngineConfig;
use cantus::generators::phrase::PhraseGenerator;
use cantus::midi::MidiWriter;

fn print_usage() {
    println!("CANTUS - Four-Measure Melody Generator");
    println!();
    println!("Usage: cantus [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --output <PATH>   Write the MIDI file to PATH (default melody.mid)");
    println!("  --seed <N>        Seed the generator for reproducible output");
    println!("  --config <PATH>   Load a YAML engine configuration");
    println!("  --help            Show this help message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut output: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" => {
                output = Some(args.next().context("--output requires a path")?);
            }
            "--seed" => {
                let raw = args.next().context("--seed requires a number")?;
                seed = Some(
                    raw.parse()
                        .map_err(|_| anyhow::anyhow!("Invalid seed: {}", raw))?,
                );
            }
            "--config" => {
                config_path = Some(args.next().context("--config requires a path")?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(1);
            }
        }
    }

    let mut config = match config_path {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(output) = output {
        config.output = output;
    }

    let mut generator = match config.seed {
        Some(seed) => PhraseGenerator::with_seed(seed),
        None => PhraseGenerator::new(),
    };
    let phrase = generator.generate().context("Melody generation failed")?;
    info!(
        slots = phrase.len(),
        ticks = phrase.total_ticks(),
        "phrase generated"
    );

    let writer = MidiWriter::from_config(&config);
    writer
        .export(&phrase, &config.output)
        .with_context(|| format!("Failed to write MIDI file: {}", config.output))?;
    info!(path = %config.output, "wrote MIDI file");

    Ok(())
}
