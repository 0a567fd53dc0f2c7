// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives: pitches, scale steps, harmony, rhythm.

pub mod harmony;
pub mod rhythm;
pub mod scale;
