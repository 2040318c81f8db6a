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

//! Weather conditions reported by the environment

use crate::ParseIdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current weather, as reported by the weather collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Rainy,
    Snowy,
    Stormy,
    Windy,
    Cloudy,
    ExtremeCold,
    ExtremeHot,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 8] = [
        WeatherCondition::Sunny,
        WeatherCondition::Rainy,
        WeatherCondition::Snowy,
        WeatherCondition::Stormy,
        WeatherCondition::Windy,
        WeatherCondition::Cloudy,
        WeatherCondition::ExtremeCold,
        WeatherCondition::ExtremeHot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Windy => "windy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::ExtremeCold => "extremeCold",
            WeatherCondition::ExtremeHot => "extremeHot",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ParseIdentifierError::new("weather", s))
    }
}
