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

//! Behavior archetypes: macro states, path types and action types
//!
//! Path types and action types are deliberately decoupled. The engine asks
//! for a path only while moving and for an action only while idle or
//! performing a special behavior.

use crate::ParseIdentifierError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Top-level behavior mode, re-selected after every completed behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorMacroState {
    Moving,
    Idle,
    Special,
}

impl BehaviorMacroState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorMacroState::Moving => "moving",
            BehaviorMacroState::Idle => "idle",
            BehaviorMacroState::Special => "special",
        }
    }
}

impl fmt::Display for BehaviorMacroState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetype of translational motion.
///
/// Ordering is the canonical one used for weighted selection: ascending by
/// identifier, compared byte-wise. Selection walks candidates in this order
/// so results never depend on hash map iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathType {
    Straight,
    RightAngle,
    Arc,
    Spiral,
    SCurve,
    AlongEdge,
    RandomDrift,
    CenterBounce,
    FullScreenChaos,
    FixedPendulum,
    Diagonal,
    ClockwiseEdge,
    Burst,
    Curve,
    Sprint,
    UpperHalfJump,
}

impl PathType {
    /// Every path type, in declaration order
    pub const ALL: [PathType; 16] = [
        PathType::Straight,
        PathType::RightAngle,
        PathType::Arc,
        PathType::Spiral,
        PathType::SCurve,
        PathType::AlongEdge,
        PathType::RandomDrift,
        PathType::CenterBounce,
        PathType::FullScreenChaos,
        PathType::FixedPendulum,
        PathType::Diagonal,
        PathType::ClockwiseEdge,
        PathType::Burst,
        PathType::Curve,
        PathType::Sprint,
        PathType::UpperHalfJump,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::Straight => "straight",
            PathType::RightAngle => "rightAngle",
            PathType::Arc => "arc",
            PathType::Spiral => "spiral",
            PathType::SCurve => "sCurve",
            PathType::AlongEdge => "alongEdge",
            PathType::RandomDrift => "randomDrift",
            PathType::CenterBounce => "centerBounce",
            PathType::FullScreenChaos => "fullScreenChaos",
            PathType::FixedPendulum => "fixedPendulum",
            PathType::Diagonal => "diagonal",
            PathType::ClockwiseEdge => "clockwiseEdge",
            PathType::Burst => "burst",
            PathType::Curve => "curve",
            PathType::Sprint => "sprint",
            PathType::UpperHalfJump => "upperHalfJump",
        }
    }

    /// Whether this path type draws from the random source
    pub fn is_randomized(&self) -> bool {
        matches!(self, PathType::RandomDrift | PathType::FullScreenChaos)
    }
}

impl Ord for PathType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for PathType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathType {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|path| path.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ParseIdentifierError::new("path", s))
    }
}

/// Archetype of a stationary or semi-stationary pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Walk,
    Stroll,
    Pause,
    HitWall,
    TaiChi,
    Yoga,
    AirShot,
    Flip,
    Split,
    CrouchCircle,
    MeasureSteps,
    Dance,
    Sleep,
    Sit,
    Stare,
    BowHead,
    Umbrella,
    CrouchCover,
    StartledJump,
    WipeSweat,
    Exhale,
    CurlUp,
    RubHands,
    CatchSnow,
    Wave,
    Handstand,
    Roll,
    StandProud,
    Bounce,
    Observe,
    EdgeSlide,
    StandWave,
    RandomSprint,
    Jump,
    EdgeHold,
    CatchRaindrop,
    AirPiano,
    AirBasketball,
    AirGeneric,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Walk => "walk",
            ActionType::Stroll => "stroll",
            ActionType::Pause => "pause",
            ActionType::HitWall => "hitWall",
            ActionType::TaiChi => "taiChi",
            ActionType::Yoga => "yoga",
            ActionType::AirShot => "airShot",
            ActionType::Flip => "flip",
            ActionType::Split => "split",
            ActionType::CrouchCircle => "crouchCircle",
            ActionType::MeasureSteps => "measureSteps",
            ActionType::Dance => "dance",
            ActionType::Sleep => "sleep",
            ActionType::Sit => "sit",
            ActionType::Stare => "stare",
            ActionType::BowHead => "bowHead",
            ActionType::Umbrella => "umbrella",
            ActionType::CrouchCover => "crouchCover",
            ActionType::StartledJump => "startledJump",
            ActionType::WipeSweat => "wipeSweat",
            ActionType::Exhale => "exhale",
            ActionType::CurlUp => "curlUp",
            ActionType::RubHands => "rubHands",
            ActionType::CatchSnow => "catchSnow",
            ActionType::Wave => "wave",
            ActionType::Handstand => "handstand",
            ActionType::Roll => "roll",
            ActionType::StandProud => "standProud",
            ActionType::Bounce => "bounce",
            ActionType::Observe => "observe",
            ActionType::EdgeSlide => "edgeSlide",
            ActionType::StandWave => "standWave",
            ActionType::RandomSprint => "randomSprint",
            ActionType::Jump => "jump",
            ActionType::EdgeHold => "edgeHold",
            ActionType::CatchRaindrop => "catchRaindrop",
            ActionType::AirPiano => "airPiano",
            ActionType::AirBasketball => "airBasketball",
            ActionType::AirGeneric => "airGeneric",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
