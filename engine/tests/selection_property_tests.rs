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

//! Property tests for weighted path selection

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stuck_engine::environment::{Environment, PowerState};
use stuck_engine::personality::config_for;
use stuck_engine::weight::{FALLBACK_PATH, effective_path_weights, select_path};
use stuck_engine::{PathType, PersonalityVariant, WeatherCondition};

fn variant() -> impl Strategy<Value = PersonalityVariant> {
    (0..PersonalityVariant::ALL.len()).prop_map(|i| PersonalityVariant::ALL[i])
}

fn weather() -> impl Strategy<Value = WeatherCondition> {
    (0..WeatherCondition::ALL.len()).prop_map(|i| WeatherCondition::ALL[i])
}

fn power() -> impl Strategy<Value = PowerState> {
    prop_oneof![
        Just(PowerState::Normal),
        Just(PowerState::LowPower),
        Just(PowerState::Charging),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn selected_path_always_has_positive_weight(
        variant in variant(),
        condition in weather(),
        hour in 0u32..24,
        power in power(),
        seed in any::<u64>(),
    ) {
        let config = config_for(variant);
        let env = Environment::new(condition, hour, power);
        let mods = env.weather_modifiers();
        let weights =
            effective_path_weights(config, &mods, env.time_coefficient, env.battery_modifier);
        let total: f64 = weights.values().sum();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..8 {
            let picked =
                select_path(config, &mods, env.time_coefficient, env.battery_modifier, &mut rng);
            if total > 0.0 {
                let weight = weights.get(&picked).copied().unwrap_or(0.0);
                prop_assert!(weight > 0.0, "{} picked {} with weight {}", variant, picked, weight);
            } else {
                prop_assert_eq!(picked, FALLBACK_PATH);
                prop_assert_eq!(picked, PathType::Straight);
            }
        }
    }
}

#[test]
fn every_combination_selects_a_positive_path() {
    let powers = [PowerState::Normal, PowerState::LowPower, PowerState::Charging];
    let mut rng = StdRng::seed_from_u64(2024);
    for variant in PersonalityVariant::ALL {
        let config = config_for(variant);
        for condition in WeatherCondition::ALL {
            for hour in 0..24 {
                for power in powers {
                    let env = Environment::new(condition, hour, power);
                    let mods = env.weather_modifiers();
                    let weights = effective_path_weights(
                        config,
                        &mods,
                        env.time_coefficient,
                        env.battery_modifier,
                    );
                    let total: f64 = weights.values().sum();
                    let picked = select_path(
                        config,
                        &mods,
                        env.time_coefficient,
                        env.battery_modifier,
                        &mut rng,
                    );
                    if total > 0.0 {
                        assert!(weights.get(&picked).is_some_and(|w| *w > 0.0));
                    } else {
                        assert_eq!(picked, PathType::Straight);
                    }
                }
            }
        }
    }
}
