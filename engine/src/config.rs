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

use crate::environment::PowerState;
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use std::path::Path;
use stuck_common::{Bounds, WeatherCondition};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "stuck.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = ".env"
    )]
    pub env_file: Option<String>,

    #[arg(short = 'n', long = "cycles", help = "Number of behavior cycles to run")]
    pub cycles: Option<u32>,

    #[arg(short = 's', long = "seed", help = "Seed for a reproducible run")]
    pub seed: Option<u64>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "stuck.yaml".to_string(),
            env_file: Some(".env".to_string()),
            cycles: None,
            seed: None,
        }
    }
}

/// Errors raised while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub storage: StorageConfig,
    pub simulation: SimulationConfig,
    pub environment: EnvironmentConfig,
}

impl Configuration {
    pub fn load(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let conf: Configuration = serde_yaml::from_reader(std::fs::File::open(path)?)?;
        conf.validate()?;
        Ok(conf)
    }

    /// Like [`Configuration::load`], but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No configuration at {}, using defaults",
                    path.as_ref().display()
                );
                Ok(Configuration::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if !(sim.width.is_finite() && sim.width > 0.0 && sim.height.is_finite() && sim.height > 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "simulation area must be positive, got {}x{}",
                sim.width, sim.height
            )));
        }
        if let Some(hour) = self.environment.hour.filter(|hour| *hour > 23) {
            return Err(ConfigError::Invalid(format!(
                "environment hour must be 0-23, got {}",
                hour
            )));
        }
        Ok(())
    }
}

/// State file used when none is configured
pub const DEFAULT_STATE_FILE: &str = "stuck-state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// State file holding the character and drift vector
    pub path: Option<EnvField<String>>,
}

impl StorageConfig {
    pub fn path(&self) -> &str {
        self.path
            .as_deref()
            .map(String::as_str)
            .unwrap_or(DEFAULT_STATE_FILE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub cycles: u32,
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
            cycles: 20,
            seed: None,
        }
    }
}

/// Overrides for the environmental collaborators. Unset values are taken
/// from the wall clock and the fallback weather roll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub weather: Option<WeatherCondition>,
    pub hour: Option<u32>,
    pub power: PowerState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_arguments_default() {
        let args = Arguments::default();
        assert_eq!(args.config_file, "stuck.yaml");
        assert_eq!(args.env_file, Some(".env".to_string()));
        assert_eq!(args.cycles, None);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_arguments_parse() {
        let args = Arguments::parse_from(["stuck-sim", "-c", "other.yaml", "--cycles", "5", "-s", "9"]);
        assert_eq!(args.config_file, "other.yaml");
        assert_eq!(args.cycles, Some(5));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_configuration_default() {
        let config = Configuration::default();
        assert_eq!(config.storage.path(), "stuck-state.json");
        assert_eq!(config.simulation.bounds(), Bounds::from_size(390.0, 844.0));
        assert_eq!(config.simulation.cycles, 20);
        assert_eq!(config.environment.weather, None);
        assert_eq!(config.environment.power, PowerState::Normal);
    }

    #[test]
    fn test_configuration_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.yaml");
        assert!(matches!(Configuration::load(&path), Err(ConfigError::Io(_))));

        let config = Configuration::load_or_default(&path).unwrap();
        assert_eq!(config.simulation.cycles, 20);
    }

    #[test]
    fn test_configuration_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("stuck.yaml");
        std::fs::write(
            &file_path,
            "storage:\n  path: \"/tmp/state.json\"\nsimulation:\n  width: 800\n  height: 600\n  cycles: 3\n  seed: 42\nenvironment:\n  weather: extremeCold\n  hour: 15\n  power: lowPower\n",
        )
        .unwrap();

        let config = Configuration::load(&file_path).unwrap();
        assert_eq!(config.storage.path(), "/tmp/state.json");
        assert_eq!(config.simulation.bounds(), Bounds::from_size(800.0, 600.0));
        assert_eq!(config.simulation.cycles, 3);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.environment.weather, Some(WeatherCondition::ExtremeCold));
        assert_eq!(config.environment.hour, Some(15));
        assert_eq!(config.environment.power, PowerState::LowPower);
    }

    #[test]
    fn test_configuration_partial_file_keeps_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("stuck.yaml");
        std::fs::write(&file_path, "simulation:\n  cycles: 7\n").unwrap();

        let config = Configuration::load(&file_path).unwrap();
        assert_eq!(config.simulation.cycles, 7);
        assert_eq!(config.simulation.width, 390.0);
        assert_eq!(config.storage.path(), "stuck-state.json");
    }

    #[test]
    fn test_configuration_storage_path_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("stuck.yaml");
        std::fs::write(&file_path, "storage:\n  path: \"${STUCK_TEST_STATE_DIR}/state.json\"\n")
            .unwrap();

        unsafe {
            std::env::set_var("STUCK_TEST_STATE_DIR", "/var/lib/stuck");
        }
        let config = Configuration::load(&file_path).unwrap();
        unsafe {
            std::env::remove_var("STUCK_TEST_STATE_DIR");
        }

        assert_eq!(config.storage.path(), "/var/lib/stuck/state.json");
    }

    #[test]
    fn test_configuration_rejects_invalid_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("stuck.yaml");

        std::fs::write(&file_path, "simulation:\n  width: 0\n").unwrap();
        assert!(matches!(
            Configuration::load(&file_path),
            Err(ConfigError::Invalid(_))
        ));

        std::fs::write(&file_path, "environment:\n  hour: 24\n").unwrap();
        assert!(matches!(
            Configuration::load(&file_path),
            Err(ConfigError::Invalid(_))
        ));

        std::fs::write(&file_path, "environment:\n  weather: hail\n").unwrap();
        assert!(matches!(
            Configuration::load(&file_path),
            Err(ConfigError::Parse(_))
        ));
    }
}
