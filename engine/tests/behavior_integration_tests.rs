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

//! Integration tests for the behavior cycle

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use stuck_engine::director::{Behavior, BehaviorDirector};
use stuck_engine::environment::{Environment, PowerState};
use stuck_engine::path::{MARGIN, PathEngine};
use stuck_engine::personality::{PersonalityState, config_for};
use stuck_engine::weight::{select_macro_state, select_path};
use stuck_engine::{BehaviorMacroState, Bounds, PathType, PersonalityVariant, Point, WeatherCondition};

#[test]
fn test_straight_path_from_corner() {
    let engine = PathEngine::new(Bounds::from_size(200.0, 200.0));
    let mut rng = StdRng::seed_from_u64(0);
    let points = engine.generate_path(PathType::Straight, Point::new(0.0, 0.0), 0.0, None, &mut rng);

    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Point::new(0.0, 0.0));
    for point in &points[1..] {
        assert!(point.x >= MARGIN && point.x <= 160.0);
        assert!(point.y >= MARGIN && point.y <= 160.0);
    }
    for pair in points.windows(2) {
        assert!(pair[1].x > pair[0].x, "x not increasing: {:?}", points);
    }
    assert!((points[4].x - 60.0).abs() < 1e-9, "final x {}", points[4].x);
    assert!((points[4].y - 40.0).abs() < 1e-9);
}

#[test]
fn test_every_personality_runs_a_full_day() {
    for variant in PersonalityVariant::ALL {
        let mut director = BehaviorDirector::new(
            PersonalityState::new(variant),
            Environment::new(WeatherCondition::Cloudy, 10, PowerState::Normal),
            Bounds::from_size(390.0, 844.0),
        );
        let interior = director.bounds().inset(MARGIN);
        let mut rng = StdRng::seed_from_u64(variant.index() as u64);
        let mut states = HashSet::new();

        for _ in 0..400 {
            let behavior = director.next_behavior(&mut rng);
            states.insert(behavior.macro_state());
            assert!(behavior.duration().is_finite());
            if let Behavior::Move { points, .. } = &behavior {
                assert!(points[1..].iter().all(|p| interior.contains(p)));
            }
        }
        assert_eq!(states.len(), 3, "{} never reached every macro state", variant);
    }
}

#[test]
fn test_low_power_night_still_selects_paths() {
    // Coefficients shrink every weight uniformly, so the choice only
    // changes once everything collapses to zero.
    let config = config_for(PersonalityVariant::ENTJ);
    let env = Environment::new(WeatherCondition::Sunny, 2, PowerState::LowPower);
    let mods = env.weather_modifiers();
    let mut rng = StdRng::seed_from_u64(31);
    let picked: HashSet<PathType> = (0..2_000)
        .map(|_| select_path(config, &mods, env.time_coefficient, env.battery_modifier, &mut rng))
        .collect();
    let eligible: HashSet<PathType> = config.ordered_path_weights().into_keys().collect();
    assert!(picked.is_subset(&eligible));
    assert!(picked.len() > 1);
}

#[test]
fn test_stormy_weather_favors_sprinting() {
    let config = config_for(PersonalityVariant::ESTJ);
    let samples = 20_000;
    let sprint_share = |condition: WeatherCondition| {
        let mods = Environment::new(condition, 10, PowerState::Normal).weather_modifiers();
        let mut rng = StdRng::seed_from_u64(17);
        (0..samples)
            .filter(|_| select_path(config, &mods, 1.0, 1.0, &mut rng) == PathType::Sprint)
            .count() as f64
            / samples as f64
    };
    assert!(sprint_share(WeatherCondition::Stormy) > sprint_share(WeatherCondition::Snowy));
}

#[test]
fn test_macro_state_is_independent_of_environment() {
    let config = config_for(PersonalityVariant::ISTJ);
    let mut rng = StdRng::seed_from_u64(3);
    let idle = (0..50_000)
        .filter(|_| select_macro_state(config, &mut rng) == BehaviorMacroState::Idle)
        .count() as f64
        / 50_000.0;
    let expected = config.idle_frequency.idle_weight() as f64 / 110.0;
    assert!((idle - expected).abs() < 0.01, "idle {} expected {}", idle, expected);
}
