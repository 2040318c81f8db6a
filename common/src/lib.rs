//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Stuck Common Types
//!
//! This crate defines the shared vocabulary used by the behavior engine and
//! by anything that renders or persists its output:
//! - Personality identifiers and their categorical traits
//! - Weather conditions reported by the environment
//! - Behavior archetypes (macro state, path type, action type)
//! - 2D geometry primitives (points and bounds)

pub mod behavior;
pub mod geometry;
pub mod personality;
pub mod weather;

pub use behavior::{ActionType, BehaviorMacroState, PathType};
pub use geometry::{Bounds, Point};
pub use personality::{HapticStyle, IdleFrequency, PersonalityVariant};
pub use weather::WeatherCondition;

/// Error returned when parsing one of the shared identifiers from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} identifier: {value}")]
pub struct ParseIdentifierError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseIdentifierError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
