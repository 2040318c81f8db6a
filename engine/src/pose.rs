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

//! Pose descriptions handed to the renderer
//!
//! The engine only names the pose an action calls for. Joint geometry and
//! animation belong to the renderer.

use serde::{Deserialize, Serialize};
use stuck_common::ActionType;

/// Kind of air performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AirKind {
    Piano,
    Basketball,
    Generic,
}

/// Pose requested for an action. Animated poses carry a phase in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "pose")]
pub enum Pose {
    Standing,
    Walking { phase: f64 },
    Sitting,
    Crouching,
    CrouchCover,
    Waving { phase: f64 },
    Jumping { phase: f64 },
    HitWall,
    Sleeping,
    TaiChi { phase: f64 },
    Yoga { phase: f64 },
    AirShot { phase: f64 },
    Flip { phase: f64 },
    Split,
    Dance { phase: f64 },
    BowHead,
    Umbrella,
    StartledJump,
    WipeSweat,
    Exhale,
    CurlUp,
    RubHands { phase: f64 },
    CatchSnow,
    Handstand,
    Roll { phase: f64 },
    StandProud,
    EdgeHold,
    AirPerformance { phase: f64, kind: AirKind },
}

/// Pose for an action at the given animation phase.
///
/// Out of range phases are clamped; a jump is always shown at its apex.
/// Actions without a dedicated pose stand.
pub fn pose_for_action(action: ActionType, phase: f64) -> Pose {
    let phase = if phase.is_finite() { phase.clamp(0.0, 1.0) } else { 0.0 };
    match action {
        ActionType::Sit | ActionType::Stare | ActionType::Observe => Pose::Sitting,
        ActionType::CrouchCircle => Pose::Crouching,
        ActionType::CrouchCover => Pose::CrouchCover,
        ActionType::Wave | ActionType::StandWave => Pose::Waving { phase },
        ActionType::Jump => Pose::Jumping { phase: 0.5 },
        ActionType::HitWall => Pose::HitWall,
        ActionType::Sleep => Pose::Sleeping,
        ActionType::TaiChi => Pose::TaiChi { phase },
        ActionType::Yoga => Pose::Yoga { phase },
        ActionType::AirShot => Pose::AirShot { phase },
        ActionType::Flip => Pose::Flip { phase },
        ActionType::Split => Pose::Split,
        ActionType::Dance => Pose::Dance { phase },
        ActionType::BowHead => Pose::BowHead,
        ActionType::Umbrella => Pose::Umbrella,
        ActionType::StartledJump => Pose::StartledJump,
        ActionType::WipeSweat => Pose::WipeSweat,
        ActionType::Exhale => Pose::Exhale,
        ActionType::CurlUp => Pose::CurlUp,
        ActionType::RubHands => Pose::RubHands { phase },
        ActionType::CatchSnow | ActionType::CatchRaindrop => Pose::CatchSnow,
        ActionType::Handstand => Pose::Handstand,
        ActionType::Roll => Pose::Roll { phase },
        ActionType::StandProud => Pose::StandProud,
        ActionType::EdgeHold => Pose::EdgeHold,
        ActionType::AirPiano => Pose::AirPerformance {
            phase,
            kind: AirKind::Piano,
        },
        ActionType::AirBasketball => Pose::AirPerformance {
            phase,
            kind: AirKind::Basketball,
        },
        ActionType::AirGeneric => Pose::AirPerformance {
            phase,
            kind: AirKind::Generic,
        },
        ActionType::Walk
        | ActionType::Stroll
        | ActionType::Pause
        | ActionType::MeasureSteps
        | ActionType::Bounce
        | ActionType::EdgeSlide
        | ActionType::RandomSprint => Pose::Standing,
    }
}
