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

//! Environmental modifiers: weather, time of day and device power state

use chrono::Timelike;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stuck_common::{PathType, WeatherCondition};

/// Additive per-path weight deltas for a weather condition.
/// Path types missing from the map are unaffected.
pub fn weather_path_modifiers(condition: WeatherCondition) -> BTreeMap<PathType, i32> {
    let mut mods = BTreeMap::new();
    match condition {
        WeatherCondition::Sunny => {
            mods.insert(PathType::Sprint, 20);
            mods.insert(PathType::Burst, 15);
        }
        WeatherCondition::Rainy => {
            mods.insert(PathType::RandomDrift, -30);
            mods.insert(PathType::AlongEdge, 10);
        }
        WeatherCondition::Snowy => {
            mods.insert(PathType::Straight, -20);
            mods.insert(PathType::Arc, 15);
        }
        WeatherCondition::Stormy => {
            mods.insert(PathType::Sprint, 40);
            mods.insert(PathType::Burst, 30);
        }
        WeatherCondition::Windy => {
            mods.insert(PathType::RandomDrift, 25);
        }
        WeatherCondition::Cloudy => {
            mods.insert(PathType::RandomDrift, 10);
        }
        WeatherCondition::ExtremeCold | WeatherCondition::ExtremeHot => {}
    }
    mods
}

/// Multiplicative activity coefficient for an hour of the day.
///
/// Night `[0, 6)` is checked first, then the afternoon peak `[14, 18)`, then
/// the broad daytime window `[8, 22)`. The afternoon window sits inside the
/// daytime window and must win. Anything else, including out of range hours,
/// is the 0.6 twilight default.
pub fn time_coefficient(hour: u32) -> f64 {
    if hour < 6 {
        0.2
    } else if (14..18).contains(&hour) {
        1.2
    } else if (8..22).contains(&hour) {
        1.0
    } else {
        0.6
    }
}

/// [`time_coefficient`] for the hour of a wall clock reading
pub fn time_coefficient_at<T: Timelike>(time: &T) -> f64 {
    time_coefficient(time.hour())
}

/// Device power state as reported by the power collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerState {
    #[default]
    Normal,
    LowPower,
    Charging,
}

impl PowerState {
    /// Derive the state from raw battery readings. Charging takes
    /// precedence over a low battery level.
    pub fn from_battery(charging: bool, level: Option<f32>) -> Self {
        if charging {
            PowerState::Charging
        } else if level.is_some_and(|level| level <= 0.2) {
            PowerState::LowPower
        } else {
            PowerState::Normal
        }
    }

    /// Speed multiplier fed into path selection
    pub fn speed_modifier(&self) -> f64 {
        match self {
            PowerState::Normal => 1.0,
            PowerState::LowPower => 0.4,
            PowerState::Charging => 1.1,
        }
    }
}

/// Roll a plausible weather condition when no weather collaborator answers.
///
/// Mostly sunny: 70% sunny, 15% rainy, 7% snowy, 4% stormy, 4% windy.
pub fn roll_fallback_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherCondition {
    let roll: f64 = rng.random_range(0.0..1.0);
    if roll < 0.7 {
        WeatherCondition::Sunny
    } else if roll < 0.85 {
        WeatherCondition::Rainy
    } else if roll < 0.92 {
        WeatherCondition::Snowy
    } else if roll < 0.96 {
        WeatherCondition::Stormy
    } else {
        WeatherCondition::Windy
    }
}

/// Snapshot of every environmental input used for one behavior cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub weather: WeatherCondition,
    pub time_coefficient: f64,
    pub battery_modifier: f64,
}

impl Environment {
    pub fn new(weather: WeatherCondition, hour: u32, power: PowerState) -> Self {
        Self {
            weather,
            time_coefficient: time_coefficient(hour),
            battery_modifier: power.speed_modifier(),
        }
    }

    pub fn weather_modifiers(&self) -> BTreeMap<PathType, i32> {
        weather_path_modifiers(self.weather)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            weather: WeatherCondition::Sunny,
            time_coefficient: 1.0,
            battery_modifier: 1.0,
        }
    }
}
