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

//! Personality drift: a slow, bounded accumulator of the weather history
//!
//! Drift nudges the intensity of a personality without ever changing its
//! variant. Each axis stays within [`MAX_DRIFT`] of zero and moves by at most
//! [`MAX_DAILY_DRIFT`] per recorded day.

use crate::storage::{KeyValueStore, StorageResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stuck_common::WeatherCondition;

/// Bound on the magnitude of every drift axis
pub const MAX_DRIFT: f64 = 0.3;

/// Cap on the change of any axis from a single daily update
pub const MAX_DAILY_DRIFT: f64 = 0.01;

/// Storage key of the persisted drift vector
pub const DRIFT_KEY: &str = "stuck.drift.vector";

/// Storage key of the last calendar day drift was recorded for
pub const LAST_DRIFT_DATE_KEY: &str = "stuck.drift.last_recorded";

/// Four bounded drift axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftVector {
    /// Introversion (I) axis
    pub introversion: f64,
    /// Intuition (N) axis
    pub intuition: f64,
    /// Feeling (F) axis
    pub feeling: f64,
    /// Perceiving (P) axis
    pub perceiving: f64,
}

impl DriftVector {
    pub const ZERO: DriftVector = DriftVector::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(introversion: f64, intuition: f64, feeling: f64, perceiving: f64) -> Self {
        Self {
            introversion,
            intuition,
            feeling,
            perceiving,
        }
    }

    /// Build a vector from `[I, N, F, P]`, clamping every axis into range
    pub fn from_axes(axes: [f64; 4]) -> Self {
        let [i, n, f, p] = axes.map(clamp_axis);
        Self::new(i, n, f, p)
    }

    /// The axes as `[I, N, F, P]`
    pub fn axes(&self) -> [f64; 4] {
        [self.introversion, self.intuition, self.feeling, self.perceiving]
    }

    /// Per-axis change contributed by one day of the given weather.
    ///
    /// Gloomy weather draws the character inwards, bright or blustery
    /// weather outwards; the intuition axis is never weather-driven.
    pub fn daily_delta(condition: WeatherCondition) -> DriftVector {
        match condition {
            WeatherCondition::Rainy | WeatherCondition::Snowy | WeatherCondition::Cloudy => {
                DriftVector::new(0.005, 0.0, 0.005, 0.005)
            }
            WeatherCondition::Sunny | WeatherCondition::Windy => {
                DriftVector::new(-0.005, 0.0, -0.005, -0.005)
            }
            WeatherCondition::Stormy => DriftVector::new(0.003, 0.0, 0.003, 0.0),
            WeatherCondition::ExtremeCold | WeatherCondition::ExtremeHot => {
                DriftVector::new(0.004, 0.0, 0.002, 0.004)
            }
        }
    }

    /// Fold one day of weather into the vector.
    ///
    /// The calendar gate belongs to the caller (see
    /// [`record_daily_drift_if_needed`]); each call is still capped at
    /// [`MAX_DAILY_DRIFT`] per axis so repeated calls stay bounded.
    pub fn record_daily(&mut self, condition: WeatherCondition) {
        let delta = Self::daily_delta(condition).axes();
        let mut axes = self.axes();
        for (axis, delta) in axes.iter_mut().zip(delta) {
            *axis = clamp_axis(*axis + delta.clamp(-MAX_DAILY_DRIFT, MAX_DAILY_DRIFT));
        }
        *self = Self::from_axes(axes);
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-MAX_DRIFT, MAX_DRIFT)
    } else {
        0.0
    }
}

/// Load the persisted drift vector.
///
/// Missing, unreadable or malformed data yields the zero vector.
pub fn load_drift<S: KeyValueStore + ?Sized>(store: &S) -> DriftVector {
    let raw = match store.get(DRIFT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DriftVector::ZERO,
        Err(e) => {
            tracing::warn!("Failed to read drift vector, resetting: {}", e);
            return DriftVector::ZERO;
        }
    };

    match serde_json::from_str::<Vec<f64>>(&raw) {
        Ok(values) if values.len() >= 4 && values[..4].iter().all(|v| v.is_finite()) => {
            DriftVector::from_axes([values[0], values[1], values[2], values[3]])
        }
        Ok(values) => {
            tracing::warn!("Malformed drift vector {:?}, resetting", values);
            DriftVector::ZERO
        }
        Err(e) => {
            tracing::warn!("Malformed drift vector '{}', resetting: {}", raw, e);
            DriftVector::ZERO
        }
    }
}

/// Persist the drift vector as a `[I, N, F, P]` array
pub fn save_drift<S: KeyValueStore + ?Sized>(
    store: &mut S,
    drift: &DriftVector,
) -> StorageResult<()> {
    store.set(DRIFT_KEY, serde_json::to_string(&drift.axes())?)
}

/// Record the weather of `today` unless that day was already recorded.
///
/// Returns the updated vector when a day was recorded and `None` when
/// `today` is not after the stored day, so a clock moved backwards never
/// records a day twice. The drift vector is written before the day marker,
/// so a failed write leaves the day unrecorded.
pub fn record_daily_drift_if_needed<S: KeyValueStore + ?Sized>(
    store: &mut S,
    today: NaiveDate,
    condition: WeatherCondition,
) -> StorageResult<Option<DriftVector>> {
    let last = store
        .get(LAST_DRIFT_DATE_KEY)?
        .and_then(|raw| raw.parse::<NaiveDate>().ok());
    if let Some(last) = last.filter(|last| *last >= today) {
        tracing::debug!("Drift already recorded through {}, skipping {}", last, today);
        return Ok(None);
    }

    let mut drift = load_drift(store);
    drift.record_daily(condition);
    save_drift(store, &drift)?;
    store.set(LAST_DRIFT_DATE_KEY, today.to_string())?;
    tracing::info!("Recorded {} drift for {}: {:?}", condition, today, drift.axes());
    Ok(Some(drift))
}

/// Forget the drift vector and the recorded day; only used for a new life
pub fn clear_drift<S: KeyValueStore + ?Sized>(store: &mut S) -> StorageResult<()> {
    store.remove(DRIFT_KEY)?;
    store.remove(LAST_DRIFT_DATE_KEY)
}
