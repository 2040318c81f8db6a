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

//! Personality identifiers and categorical personality traits

use crate::ParseIdentifierError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the sixteen fixed personality variants.
///
/// A character is assigned a variant once, on first launch, and keeps it for
/// its whole life. The variant selects a static configuration of path
/// weights, idle frequency and special actions.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersonalityVariant {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl PersonalityVariant {
    /// Every variant, in declaration order
    pub const ALL: [PersonalityVariant; 16] = [
        PersonalityVariant::INTJ,
        PersonalityVariant::INTP,
        PersonalityVariant::ENTJ,
        PersonalityVariant::ENTP,
        PersonalityVariant::INFJ,
        PersonalityVariant::INFP,
        PersonalityVariant::ENFJ,
        PersonalityVariant::ENFP,
        PersonalityVariant::ISTJ,
        PersonalityVariant::ISFJ,
        PersonalityVariant::ESTJ,
        PersonalityVariant::ESFJ,
        PersonalityVariant::ISTP,
        PersonalityVariant::ISFP,
        PersonalityVariant::ESTP,
        PersonalityVariant::ESFP,
    ];

    /// Pick a variant uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Position of this variant in [`PersonalityVariant::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The persisted identifier of this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityVariant::INTJ => "INTJ",
            PersonalityVariant::INTP => "INTP",
            PersonalityVariant::ENTJ => "ENTJ",
            PersonalityVariant::ENTP => "ENTP",
            PersonalityVariant::INFJ => "INFJ",
            PersonalityVariant::INFP => "INFP",
            PersonalityVariant::ENFJ => "ENFJ",
            PersonalityVariant::ENFP => "ENFP",
            PersonalityVariant::ISTJ => "ISTJ",
            PersonalityVariant::ISFJ => "ISFJ",
            PersonalityVariant::ESTJ => "ESTJ",
            PersonalityVariant::ESFJ => "ESFJ",
            PersonalityVariant::ISTP => "ISTP",
            PersonalityVariant::ISFP => "ISFP",
            PersonalityVariant::ESTP => "ESTP",
            PersonalityVariant::ESFP => "ESFP",
        }
    }
}

impl fmt::Display for PersonalityVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityVariant {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ParseIdentifierError::new("personality", s))
    }
}

/// How often a personality stops to idle, as a five-level ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdleFrequency {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IdleFrequency {
    /// Every tier, lowest first
    pub const ALL: [IdleFrequency; 5] = [
        IdleFrequency::VeryLow,
        IdleFrequency::Low,
        IdleFrequency::Medium,
        IdleFrequency::High,
        IdleFrequency::VeryHigh,
    ];

    /// Idle weight out of a moving + idle budget of 100
    pub fn idle_weight(&self) -> u32 {
        match self {
            IdleFrequency::VeryLow => 5,
            IdleFrequency::Low => 15,
            IdleFrequency::Medium => 30,
            IdleFrequency::High => 50,
            IdleFrequency::VeryHigh => 65,
        }
    }
}

/// Haptic feedback flavour associated with a personality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HapticStyle {
    Sharp,
    Soft,
    Heavy,
    DoubleTap,
    Pulse,
    Ethereal,
    Success,
    Burst,
    Rigid,
    Warm,
    Thud,
    Cyclic,
    Impactful,
    Fluid,
    Violent,
    Sparkling,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_variant_index_matches_all() {
        for (idx, variant) in PersonalityVariant::ALL.iter().enumerate() {
            assert_eq!(variant.index(), idx);
        }
    }

    #[test]
    fn test_variant_string_round_trip() {
        for variant in PersonalityVariant::ALL {
            let parsed: PersonalityVariant = variant.to_string().parse().unwrap();
            assert_eq!(parsed, variant);
        }
        assert_eq!("enfp".parse::<PersonalityVariant>(), Ok(PersonalityVariant::ENFP));
        assert!("XXXX".parse::<PersonalityVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_identifier() {
        let json = serde_json::to_string(&PersonalityVariant::ISFJ).unwrap();
        assert_eq!(json, "\"ISFJ\"");
    }

    #[test]
    fn test_random_variant_covers_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(PersonalityVariant::random(&mut rng));
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_idle_weights() {
        let weights: Vec<u32> = IdleFrequency::ALL.iter().map(|f| f.idle_weight()).collect();
        assert_eq!(weights, vec![5, 15, 30, 50, 65]);
    }
}
