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

//! The persisted character: which personality it was born with and when
//!
//! A character is created once, on first launch, with a uniformly random
//! personality variant. It keeps that variant for its whole life; only
//! [`begin_new_life`] replaces it.

use crate::drift::clear_drift;
use crate::storage::{KeyValueStore, StorageResult};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use stuck_common::PersonalityVariant;
use uuid::Uuid;

/// Storage key of the current character record
pub const CHARACTER_KEY: &str = "stuck.character";

/// Storage key of the list of ended lives
pub const PAST_LIVES_KEY: &str = "stuck.past_lives";

/// The living character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: Uuid,
    pub variant: PersonalityVariant,
    pub created_at: DateTime<Utc>,
}

impl CharacterRecord {
    pub fn new(variant: PersonalityVariant, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            created_at,
        }
    }

    /// Whole hours lived as of `now`; zero if `now` precedes the birth
    pub fn lifespan_hours(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.created_at).num_hours()).unwrap_or(0)
    }
}

/// Summary of an ended life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastLife {
    pub variant: PersonalityVariant,
    pub lifespan_hours: u64,
    pub ended_at: DateTime<Utc>,
}

/// Load the stored character, or create and persist a new one.
///
/// A record that cannot be parsed is replaced. When the store cannot be
/// read at all, a record for this session only is returned and nothing is
/// written, so a stored character is never overwritten. Failing to persist
/// a new record is logged and the record is still returned.
pub fn resolve_character<S, R>(store: &mut S, rng: &mut R, now: DateTime<Utc>) -> CharacterRecord
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    match store.get(CHARACTER_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<CharacterRecord>(&raw) {
            Ok(record) => {
                tracing::debug!("Loaded character {} ({})", record.id, record.variant);
                return record;
            }
            Err(e) => tracing::warn!("Discarding unreadable character record: {}", e),
        },
        Ok(None) => {}
        Err(e) => {
            let record = CharacterRecord::new(PersonalityVariant::random(rng), now);
            tracing::warn!(
                "Failed to read character record, running as unsaved {} {}: {}",
                record.variant,
                record.id,
                e
            );
            return record;
        }
    }

    let record = CharacterRecord::new(PersonalityVariant::random(rng), now);
    if let Err(e) = save_character(store, &record) {
        tracing::warn!("Failed to persist new character {}: {}", record.id, e);
    }
    tracing::info!("A new {} character was born: {}", record.variant, record.id);
    record
}

pub fn save_character<S: KeyValueStore + ?Sized>(
    store: &mut S,
    record: &CharacterRecord,
) -> StorageResult<()> {
    store.set(CHARACTER_KEY, serde_json::to_string(record)?)
}

/// Every ended life, oldest first. Unreadable history reads as empty.
pub fn past_lives<S: KeyValueStore + ?Sized>(store: &S) -> Vec<PastLife> {
    match store.get(PAST_LIVES_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable past lives: {}", e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read past lives: {}", e);
            Vec::new()
        }
    }
}

/// End the current life and start a new one.
///
/// The ended life is appended to the past lives, the drift vector and its
/// day marker are cleared and a fresh character with a random variant is
/// persisted.
pub fn begin_new_life<S, R>(
    store: &mut S,
    current: &CharacterRecord,
    rng: &mut R,
    now: DateTime<Utc>,
) -> StorageResult<CharacterRecord>
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut lives = past_lives(store);
    lives.push(PastLife {
        variant: current.variant,
        lifespan_hours: current.lifespan_hours(now),
        ended_at: now,
    });
    store.set(PAST_LIVES_KEY, serde_json::to_string(&lives)?)?;

    clear_drift(store)?;

    let record = CharacterRecord::new(PersonalityVariant::random(rng), now);
    save_character(store, &record)?;
    tracing::info!(
        "{} lived {} hours; reborn as {}",
        current.variant,
        current.lifespan_hours(now),
        record.variant
    );
    Ok(record)
}
