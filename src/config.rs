//! Configuration handling for the TUI

use crate::state::{CountryDirectory, CountryEntry};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filter applied when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "registration_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Directory holding the submitted record (defaults to the user data dir)
    pub storage_dir: Option<PathBuf>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
    /// Replacement country list for the country and city dropdowns
    pub countries: Option<Vec<CountryEntry>>,
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing config file
    File,
    /// First run; a starter file was written
    Created,
    /// No config directory available
    Defaults,
}

impl RegistrationConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "registration", "registration-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, writing a starter file on first run so the
    /// country list can be edited
    pub fn load_or_create() -> Result<(Self, ConfigSource)> {
        match Self::config_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    fn load_or_create_at(path: &Path) -> Result<(Self, ConfigSource)> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: RegistrationConfig = serde_json::from_str(&content)?;
            return Ok((config, ConfigSource::File));
        }

        let config = Self {
            countries: Some(CountryDirectory::builtin().entries().to_vec()),
            ..Default::default()
        };
        config.save_to(path)?;
        Ok((config, ConfigSource::Created))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Where submitted records are kept
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }

    /// Where log files are written
    pub fn log_dir(&self) -> Option<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .or_else(|| self.storage_dir.as_ref().map(|dir| dir.join("logs")))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Country directory from config, or the built-in one
    pub fn country_directory(&self) -> CountryDirectory {
        let directory = match &self.countries {
            Some(entries) => CountryDirectory::new(entries.clone()),
            None => return CountryDirectory::builtin(),
        };
        if directory.is_empty() {
            tracing::warn!("configured country list is empty, using built-in countries");
            return CountryDirectory::builtin();
        }
        tracing::debug!(countries = directory.len(), "using configured countries");
        directory
    }
}
