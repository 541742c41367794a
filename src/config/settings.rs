use anyhow::{ensure, Context, Result};
use chrono::Duration;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Locale;

fn default_hijri_offset() -> i32 {
    0
}
fn default_tick_interval_secs() -> u64 {
    60
}
fn default_dwell_secs() -> u64 {
    crate::prayer_times::tracker::DEFAULT_DWELL_SECS
}

const MAX_HIJRI_OFFSET: i32 = 30;
const MAX_ENGINE_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Days to add/subtract from Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How often the countdown is recomputed.
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
    /// Minimum time a "next prayer" must stay on screen before a new one
    /// replaces it.
    #[serde(default = "default_dwell_secs")]
    pub dwell_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            dwell_secs: default_dwell_secs(),
        }
    }
}

impl EngineConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.tick_interval_secs.max(1))
    }

    /// Values past what `Duration` holds fall back to the default window.
    pub fn dwell(&self) -> Duration {
        i64::try_from(self.dwell_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| {
                log::warn!("dwell_secs {} is out of range, using default", self.dwell_secs);
                Duration::seconds(default_dwell_secs() as i64)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "mawaqit").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (-MAX_HIJRI_OFFSET..=MAX_HIJRI_OFFSET).contains(&self.display.hijri_offset),
            "display.hijri_offset must be within ±{} days, got {}",
            MAX_HIJRI_OFFSET,
            self.display.hijri_offset
        );
        ensure!(
            self.engine.tick_interval_secs <= MAX_ENGINE_SECS,
            "engine.tick_interval_secs must be at most {}, got {}",
            MAX_ENGINE_SECS,
            self.engine.tick_interval_secs
        );
        ensure!(
            self.engine.dwell_secs <= MAX_ENGINE_SECS,
            "engine.dwell_secs must be at most {}, got {}",
            MAX_ENGINE_SECS,
            self.engine.dwell_secs
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Serializing config")
    }
}
