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

use chrono::{Local, Utc};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stuck_engine::character::resolve_character;
use stuck_engine::config::{Arguments, Configuration};
use stuck_engine::director::{Behavior, BehaviorDirector};
use stuck_engine::drift::{load_drift, record_daily_drift_if_needed};
use stuck_engine::environment::{
    Environment, roll_fallback_weather, time_coefficient, time_coefficient_at,
};
use stuck_engine::personality::PersonalityState;
use stuck_engine::storage::FileStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    let config = Configuration::load_or_default(&arguments.config_file)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let seed = arguments.seed.or(config.simulation.seed);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    tracing::info!("Opening state file {}", config.storage.path());
    let mut store = FileStore::open(config.storage.path())?;

    let now = Utc::now();
    let character = resolve_character(&mut store, &mut rng, now);
    tracing::info!(
        "Character {} is {} and has lived {} hours",
        character.id,
        character.variant,
        character.lifespan_hours(now)
    );

    let weather = config
        .environment
        .weather
        .unwrap_or_else(|| roll_fallback_weather(&mut rng));
    let today = Local::now().date_naive();
    let drift = match record_daily_drift_if_needed(&mut store, today, weather) {
        Ok(Some(drift)) => drift,
        Ok(None) => load_drift(&store),
        Err(e) => {
            tracing::warn!("Failed to record drift for {}: {}", today, e);
            load_drift(&store)
        }
    };
    tracing::info!("Drift vector: {:?}", drift.axes());

    let environment = Environment {
        weather,
        time_coefficient: match config.environment.hour {
            Some(hour) => time_coefficient(hour),
            None => time_coefficient_at(&Local::now()),
        },
        battery_modifier: config.environment.power.speed_modifier(),
    };
    tracing::info!(
        "Environment: {}, time x{}, battery x{}",
        environment.weather,
        environment.time_coefficient,
        environment.battery_modifier
    );

    let personality = PersonalityState::new(character.variant).with_drift(drift);
    let mut director =
        BehaviorDirector::new(personality, environment, config.simulation.bounds());

    let cycles = arguments.cycles.unwrap_or(config.simulation.cycles);
    let mut elapsed = 0.0;
    for cycle in 1..=cycles {
        let behavior = director.next_behavior(&mut rng);
        elapsed += behavior.duration();
        match &behavior {
            Behavior::Move { path, points, .. } => tracing::info!(
                "[{:>3}] {} {} through {} points to ({:.0}, {:.0})",
                cycle,
                behavior.macro_state(),
                path,
                points.len(),
                director.position().x,
                director.position().y
            ),
            Behavior::Idle { action, pose, .. } | Behavior::Special { action, pose, .. } => {
                tracing::info!(
                    "[{:>3}] {} {} as {:?} for {:.1}s",
                    cycle,
                    behavior.macro_state(),
                    action,
                    pose,
                    behavior.duration()
                )
            }
        }
    }

    tracing::info!("Ran {} cycles covering {:.1}s", cycles, elapsed);
    Ok(())
}
