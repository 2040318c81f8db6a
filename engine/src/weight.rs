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

//! Weighted selection of macro states, paths and actions
//!
//! Path weights follow
//! `effective = max(0, (base + weather) * time_coefficient * battery_modifier)`
//! and are walked in canonical [`PathType`] order, so a seeded generator
//! always yields the same choice.

use crate::personality::PersonalityConfig;
use rand::Rng;
use std::collections::BTreeMap;
use stuck_common::{ActionType, BehaviorMacroState, PathType};

/// Fixed weight of the special macro state
pub const SPECIAL_WEIGHT: u32 = 10;

/// Path chosen when no candidate has a positive effective weight
pub const FALLBACK_PATH: PathType = PathType::Straight;

/// Pick moving, idle or special.
///
/// The idle weight comes from the idle frequency tier, moving takes the rest
/// of a budget of 100 and special is fixed at [`SPECIAL_WEIGHT`].
pub fn select_macro_state<R: Rng + ?Sized>(
    config: &PersonalityConfig,
    rng: &mut R,
) -> BehaviorMacroState {
    let idle_weight = config.idle_frequency.idle_weight();
    let moving_weight = 100 - idle_weight;
    let total = moving_weight + idle_weight + SPECIAL_WEIGHT;

    let roll = rng.random_range(0..total);
    let state = if roll < moving_weight {
        BehaviorMacroState::Moving
    } else if roll < moving_weight + idle_weight {
        BehaviorMacroState::Idle
    } else {
        BehaviorMacroState::Special
    };

    tracing::trace!(
        "Macro state roll {} of {} for {}: {}",
        roll,
        total,
        config.variant,
        state
    );
    state
}

/// Effective weight of every eligible path type, in canonical order.
///
/// Weather modifiers default to zero for path types they do not list.
/// Negative and non-finite products are floored at zero.
pub fn effective_path_weights(
    config: &PersonalityConfig,
    weather_modifiers: &BTreeMap<PathType, i32>,
    time_coefficient: f64,
    battery_modifier: f64,
) -> BTreeMap<PathType, f64> {
    config
        .ordered_path_weights()
        .into_iter()
        .map(|(path, base)| {
            let modifier = weather_modifiers.get(&path).copied().unwrap_or(0);
            let weight =
                (f64::from(base) + f64::from(modifier)) * time_coefficient * battery_modifier;
            let weight = if weight.is_finite() { weight.max(0.0) } else { 0.0 };
            (path, weight)
        })
        .collect()
}

/// Pick a path type by effective weight.
///
/// Falls back to [`FALLBACK_PATH`] when the total weight is not positive.
/// A path with zero effective weight is never returned while another path
/// has a positive one.
pub fn select_path<R: Rng + ?Sized>(
    config: &PersonalityConfig,
    weather_modifiers: &BTreeMap<PathType, i32>,
    time_coefficient: f64,
    battery_modifier: f64,
    rng: &mut R,
) -> PathType {
    let weights = effective_path_weights(
        config,
        weather_modifiers,
        time_coefficient,
        battery_modifier,
    );
    let total: f64 = weights.values().sum();
    if !total.is_finite() || total <= 0.0 {
        tracing::debug!(
            "No positive path weight for {}, falling back to {}",
            config.variant,
            FALLBACK_PATH
        );
        return FALLBACK_PATH;
    }

    let roll = rng.random_range(0.0..total);
    let mut accumulated = 0.0;
    for (path, weight) in &weights {
        accumulated += weight;
        if roll < accumulated {
            tracing::debug!("Selected path {} ({:.1} of {:.1})", path, weight, total);
            return *path;
        }
    }

    // Rounding can leave the roll a hair above the final running sum.
    weights
        .iter()
        .rev()
        .find(|(_, weight)| **weight > 0.0)
        .map(|(path, _)| *path)
        .unwrap_or(FALLBACK_PATH)
}

/// Pick an action uniformly from `candidates`.
///
/// Returns `None` for an empty list; the caller decides the fallback.
pub fn select_action<R: Rng + ?Sized>(
    candidates: &[ActionType],
    rng: &mut R,
) -> Option<ActionType> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
