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

//! Performance benchmarks for behavior selection and path generation
//!
//! Run with: cargo bench --bench behavior_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use stuck_engine::director::BehaviorDirector;
use stuck_engine::environment::{Environment, PowerState, weather_path_modifiers};
use stuck_engine::path::PathEngine;
use stuck_engine::personality::{PersonalityState, config_for};
use stuck_engine::weight::{select_macro_state, select_path};
use stuck_engine::{Bounds, PathType, PersonalityVariant, Point, WeatherCondition};

/// Benchmark path generation for every path type
fn bench_generate_path(c: &mut Criterion) {
    let engine = PathEngine::new(Bounds::from_size(390.0, 844.0));
    let start = Point::new(120.0, 300.0);
    let mut group = c.benchmark_group("generate_path");

    for path in PathType::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(path), &path, |b, path| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| engine.generate_path(black_box(*path), black_box(start), 0.7, None, &mut rng));
        });
    }

    group.finish();
}

/// Benchmark weighted selection
fn bench_selection(c: &mut Criterion) {
    let config = config_for(PersonalityVariant::ESTJ);
    let mods = weather_path_modifiers(WeatherCondition::Stormy);

    c.bench_function("select_macro_state", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| select_macro_state(black_box(config), &mut rng));
    });

    c.bench_function("select_path", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| select_path(black_box(config), black_box(&mods), 1.2, 1.1, &mut rng));
    });
}

/// Benchmark a full behavior cycle
fn bench_behavior_cycle(c: &mut Criterion) {
    let mut director = BehaviorDirector::new(
        PersonalityState::new(PersonalityVariant::ENFP),
        Environment::new(WeatherCondition::Windy, 15, PowerState::Charging),
        Bounds::from_size(390.0, 844.0),
    );
    let mut rng = StdRng::seed_from_u64(4);

    c.bench_function("next_behavior", |b| {
        b.iter(|| director.next_behavior(&mut rng));
    });
}

criterion_group!(benches, bench_generate_path, bench_selection, bench_behavior_cycle);
criterion_main!(benches);
