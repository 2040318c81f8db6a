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

//! Stuck Behavior Engine
//!
//! Decides what the character does next and where it goes:
//! - [`weight`] picks a macro state, a path type or an action from the
//!   personality's weight table adjusted by the environment
//! - [`path`] expands a path type into a point sequence inside the roaming area
//! - [`drift`] slowly accumulates the weather history into a bounded vector
//! - [`director`] strings these together into the behavior cycle
//!
//! Every source of randomness is an injected [`rand::Rng`], so a seeded
//! generator makes the whole engine reproducible.

pub mod character;
pub mod config;
pub mod director;
pub mod drift;
pub mod environment;
pub mod path;
pub mod personality;
pub mod pose;
pub mod storage;
pub mod weight;

pub use stuck_common::*;
