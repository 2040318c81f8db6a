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

//! Static personality configuration and the per-character personality state

use crate::drift::DriftVector;
use std::collections::BTreeMap;
use stuck_common::{ActionType, HapticStyle, IdleFrequency, PathType, PersonalityVariant};

/// Static behavior profile of a personality variant.
/// Looked up by variant, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityConfig {
    pub variant: PersonalityVariant,
    /// Base weight per eligible path type. Absent path types are ineligible.
    pub path_weights: &'static [(PathType, u32)],
    pub idle_frequency: IdleFrequency,
    /// Eligible special actions, in authoring order
    pub special_actions: &'static [ActionType],
    pub haptic_style: HapticStyle,
}

impl PersonalityConfig {
    /// Base weight of a path type, zero when ineligible
    pub fn base_weight(&self, path: PathType) -> u32 {
        self.path_weights
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    /// Eligible path weights in canonical path order
    pub fn ordered_path_weights(&self) -> BTreeMap<PathType, u32> {
        self.path_weights
            .iter()
            .filter(|(_, weight)| *weight > 0)
            .map(|(path, weight)| (*path, *weight))
            .collect()
    }

    /// Candidates for an idle pause: the special actions plus sitting and staring
    pub fn idle_actions(&self) -> Vec<ActionType> {
        let mut actions = self.special_actions.to_vec();
        actions.extend([ActionType::Sit, ActionType::Stare]);
        actions
    }
}

/// Look up the static configuration of a personality variant
pub fn config_for(variant: PersonalityVariant) -> &'static PersonalityConfig {
    &CONFIGS[variant.index()]
}

// Indexed by PersonalityVariant::index, keep in declaration order.
static CONFIGS: [PersonalityConfig; 16] = [
    PersonalityConfig {
        variant: PersonalityVariant::INTJ,
        path_weights: &[(PathType::Straight, 70), (PathType::RightAngle, 20)],
        idle_frequency: IdleFrequency::Medium,
        special_actions: &[ActionType::Observe],
        haptic_style: HapticStyle::Sharp,
    },
    PersonalityConfig {
        variant: PersonalityVariant::INTP,
        path_weights: &[(PathType::RandomDrift, 30)],
        idle_frequency: IdleFrequency::VeryHigh,
        special_actions: &[ActionType::Stare, ActionType::CrouchCircle],
        haptic_style: HapticStyle::Soft,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ENTJ,
        path_weights: &[(PathType::Sprint, 50), (PathType::Burst, 40)],
        idle_frequency: IdleFrequency::Low,
        special_actions: &[ActionType::StandProud, ActionType::HitWall],
        haptic_style: HapticStyle::Heavy,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ENTP,
        path_weights: &[(PathType::CenterBounce, 40), (PathType::Diagonal, 40)],
        idle_frequency: IdleFrequency::Medium,
        special_actions: &[ActionType::Dance, ActionType::Bounce],
        haptic_style: HapticStyle::DoubleTap,
    },
    PersonalityConfig {
        variant: PersonalityVariant::INFJ,
        path_weights: &[(PathType::AlongEdge, 60)],
        idle_frequency: IdleFrequency::High,
        special_actions: &[ActionType::Observe, ActionType::EdgeSlide],
        haptic_style: HapticStyle::Pulse,
    },
    PersonalityConfig {
        variant: PersonalityVariant::INFP,
        path_weights: &[(PathType::Arc, 40)],
        idle_frequency: IdleFrequency::VeryHigh,
        special_actions: &[ActionType::Sit, ActionType::Stare, ActionType::CurlUp],
        haptic_style: HapticStyle::Ethereal,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ENFJ,
        path_weights: &[(PathType::CenterBounce, 50)],
        idle_frequency: IdleFrequency::Low,
        special_actions: &[
            ActionType::StandWave,
            ActionType::Wave,
            ActionType::Jump,
            ActionType::AirBasketball,
        ],
        haptic_style: HapticStyle::Success,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ENFP,
        path_weights: &[(PathType::FullScreenChaos, 70)],
        idle_frequency: IdleFrequency::VeryLow,
        special_actions: &[
            ActionType::RandomSprint,
            ActionType::Jump,
            ActionType::Handstand,
            ActionType::AirGeneric,
        ],
        haptic_style: HapticStyle::Burst,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ISTJ,
        path_weights: &[(PathType::FixedPendulum, 80)],
        idle_frequency: IdleFrequency::Medium,
        special_actions: &[ActionType::Umbrella],
        haptic_style: HapticStyle::Rigid,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ISFJ,
        path_weights: &[(PathType::RandomDrift, 70)],
        idle_frequency: IdleFrequency::High,
        special_actions: &[ActionType::CrouchCircle, ActionType::EdgeHold],
        haptic_style: HapticStyle::Warm,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ESTJ,
        path_weights: &[(PathType::Diagonal, 60), (PathType::Sprint, 40)],
        idle_frequency: IdleFrequency::Low,
        special_actions: &[ActionType::HitWall],
        haptic_style: HapticStyle::Thud,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ESFJ,
        path_weights: &[(PathType::ClockwiseEdge, 80)],
        idle_frequency: IdleFrequency::Medium,
        special_actions: &[ActionType::Observe],
        haptic_style: HapticStyle::Cyclic,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ISTP,
        path_weights: &[(PathType::Burst, 30)],
        idle_frequency: IdleFrequency::VeryHigh,
        special_actions: &[],
        haptic_style: HapticStyle::Impactful,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ISFP,
        path_weights: &[(PathType::Curve, 50), (PathType::SCurve, 30)],
        idle_frequency: IdleFrequency::Medium,
        special_actions: &[
            ActionType::CatchSnow,
            ActionType::CatchRaindrop,
            ActionType::AirPiano,
        ],
        haptic_style: HapticStyle::Fluid,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ESTP,
        path_weights: &[(PathType::Sprint, 60), (PathType::Burst, 30)],
        idle_frequency: IdleFrequency::VeryLow,
        special_actions: &[ActionType::HitWall],
        haptic_style: HapticStyle::Violent,
    },
    PersonalityConfig {
        variant: PersonalityVariant::ESFP,
        path_weights: &[(PathType::UpperHalfJump, 50)],
        idle_frequency: IdleFrequency::Low,
        special_actions: &[ActionType::Jump, ActionType::Dance, ActionType::Wave],
        haptic_style: HapticStyle::Sparkling,
    },
];

/// Personality of one character, owned by the caller and passed into the
/// engine. The variant never changes; the drift vector is updated at most
/// once per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityState {
    variant: PersonalityVariant,
    pub drift: DriftVector,
}

impl PersonalityState {
    pub fn new(variant: PersonalityVariant) -> Self {
        Self {
            variant,
            drift: DriftVector::default(),
        }
    }

    /// Attach a previously persisted drift vector
    pub fn with_drift(mut self, drift: DriftVector) -> Self {
        self.drift = drift;
        self
    }

    pub fn variant(&self) -> PersonalityVariant {
        self.variant
    }

    pub fn config(&self) -> &'static PersonalityConfig {
        config_for(self.variant)
    }
}
