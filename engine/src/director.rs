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

//! Behavior director: runs one behavior cycle at a time
//!
//! Each cycle picks a macro state and turns it into something the renderer
//! can play back: a point sequence to walk, or an action held for a while.
//! The director remembers where the character ended up and which way it
//! was heading so consecutive moves connect.

use crate::environment::Environment;
use crate::path::PathEngine;
use crate::personality::PersonalityState;
use crate::pose::{Pose, pose_for_action};
use crate::weight::{select_action, select_macro_state, select_path};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use stuck_common::{ActionType, BehaviorMacroState, Bounds, PathType, Point};

/// Walking speed in points per second
pub const WALK_SPEED: f64 = 80.0;

/// Seconds an idle action is held
pub const IDLE_DURATION: RangeInclusive<f64> = 2.0..=5.0;

/// Seconds a special action is held
pub const SPECIAL_DURATION: RangeInclusive<f64> = 1.5..=4.0;

/// Idle action when the candidate list is empty
pub const FALLBACK_IDLE_ACTION: ActionType = ActionType::Stare;

/// Special action when the personality has none
pub const FALLBACK_SPECIAL_ACTION: ActionType = ActionType::Wave;

/// Segments shorter than this do not change the heading
const MIN_SEGMENT: f64 = 1e-9;

/// Outcome of one behavior cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum Behavior {
    Move {
        path: PathType,
        points: Vec<Point>,
        duration: f64,
    },
    Idle {
        action: ActionType,
        pose: Pose,
        duration: f64,
    },
    Special {
        action: ActionType,
        pose: Pose,
        duration: f64,
    },
}

impl Behavior {
    pub fn macro_state(&self) -> BehaviorMacroState {
        match self {
            Behavior::Move { .. } => BehaviorMacroState::Moving,
            Behavior::Idle { .. } => BehaviorMacroState::Idle,
            Behavior::Special { .. } => BehaviorMacroState::Special,
        }
    }

    /// Seconds the renderer needs to play this behavior back
    pub fn duration(&self) -> f64 {
        match self {
            Behavior::Move { duration, .. }
            | Behavior::Idle { duration, .. }
            | Behavior::Special { duration, .. } => *duration,
        }
    }
}

/// Drives the behavior cycle of one character
#[derive(Debug, Clone)]
pub struct BehaviorDirector {
    personality: PersonalityState,
    environment: Environment,
    weather_modifiers: BTreeMap<PathType, i32>,
    paths: PathEngine,
    position: Point,
    direction: f64,
}

impl BehaviorDirector {
    /// Start a director with the character standing in the middle of `bounds`
    pub fn new(personality: PersonalityState, environment: Environment, bounds: Bounds) -> Self {
        let weather_modifiers = environment.weather_modifiers();
        Self {
            personality,
            environment,
            weather_modifiers,
            paths: PathEngine::new(bounds),
            position: bounds.center(),
            direction: 0.0,
        }
    }

    pub fn personality(&self) -> &PersonalityState {
        &self.personality
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Swap in a fresh environment snapshot, e.g. after a weather refresh
    pub fn set_environment(&mut self, environment: Environment) {
        self.weather_modifiers = environment.weather_modifiers();
        self.environment = environment;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading in radians of the last segment walked
    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn bounds(&self) -> Bounds {
        self.paths.bounds()
    }

    /// Adopt a new roaming area. Areas without positive size are ignored.
    pub fn resize(&mut self, bounds: Bounds) {
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            tracing::debug!("Ignoring resize to {:?}", bounds);
            return;
        }
        self.paths.set_bounds(bounds);
    }

    /// Run one behavior cycle
    pub fn next_behavior<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Behavior {
        let config = self.personality.config();
        match select_macro_state(config, rng) {
            BehaviorMacroState::Moving => self.next_move(rng),
            BehaviorMacroState::Idle => {
                let action =
                    select_action(&config.idle_actions(), rng).unwrap_or(FALLBACK_IDLE_ACTION);
                let pose = pose_for_action(action, rng.random_range(0.0..=1.0));
                let duration = rng.random_range(IDLE_DURATION);
                tracing::debug!("Idle {} for {:.1}s", action, duration);
                Behavior::Idle {
                    action,
                    pose,
                    duration,
                }
            }
            BehaviorMacroState::Special => {
                let action = select_action(config.special_actions, rng)
                    .unwrap_or(FALLBACK_SPECIAL_ACTION);
                let pose = pose_for_action(action, rng.random_range(0.0..=1.0));
                let duration = rng.random_range(SPECIAL_DURATION);
                tracing::debug!("Special {} for {:.1}s", action, duration);
                Behavior::Special {
                    action,
                    pose,
                    duration,
                }
            }
        }
    }

    fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Behavior {
        let path = select_path(
            self.personality.config(),
            &self.weather_modifiers,
            self.environment.time_coefficient,
            self.environment.battery_modifier,
            rng,
        );
        let points = self
            .paths
            .generate_path(path, self.position, self.direction, None, rng);

        let mut distance = 0.0;
        for segment in points.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            let length = from.distance(&to);
            if length > MIN_SEGMENT {
                self.direction = (to.y - from.y).atan2(to.x - from.x);
                distance += length;
            }
        }
        if let Some(last) = points.last() {
            self.position = *last;
        }

        let duration = distance / WALK_SPEED;
        tracing::debug!(
            "Move {} through {} points, {:.1}s",
            path,
            points.len(),
            duration
        );
        Behavior::Move {
            path,
            points,
            duration,
        }
    }
}
