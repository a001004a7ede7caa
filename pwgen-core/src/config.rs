// File:    config.rs
// Date:    2026-08-28
//
// Description: YAML-backed profile configuration with round-trippable load and save.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::profile::{GenerationProfile, ProfileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error raised while loading or saving a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid YAML of the expected shape.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One named profile as it appears in the YAML configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Maximum inter-word separator length.
    pub max_sep_length: usize,
    /// Maximum word length in characters.
    pub max_word_length: usize,
    /// Minimum inter-word separator length.
    pub min_sep_length: usize,
    /// Minimum word length in characters.
    pub min_word_length: usize,
    /// Number of passphrases generated per run.
    pub num_passwords: usize,
    /// Length of the trailing separator; zero disables it.
    pub suffix_sep_length: usize,
    /// The alphabet separator characters are drawn from.
    pub symbols: String,
    /// Path to the newline-delimited word-list file.
    pub words_file: String,
    /// Number of words in each passphrase.
    pub words_per_password: usize,
}

impl ProfileConfig {
    /// Converts this config entry into a validated [`GenerationProfile`].
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the entry's bounds or counts are
    /// inconsistent.
    pub fn to_profile(&self) -> Result<GenerationProfile, ProfileError> {
        let profile = GenerationProfile {
            min_word_length: self.min_word_length,
            max_word_length: self.max_word_length,
            words_per_password: self.words_per_password,
            min_sep_length: self.min_sep_length,
            max_sep_length: self.max_sep_length,
            suffix_sep_length: self.suffix_sep_length,
            symbols: self.symbols.clone(),
            words_file: PathBuf::from(&self.words_file),
            num_passwords: self.num_passwords,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// The full configuration document: one entry per named profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Parameters for the standard (strong) profile.
    pub standard: ProfileConfig,
    /// Parameters for the short profile.
    pub short: ProfileConfig,
}

impl Config {
    /// Parses a YAML configuration file into a `Config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is unreadable or not valid
    /// YAML of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Writes this configuration out as a YAML file.
    ///
    /// Saving and re-loading reproduces the same field values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let data = serde_yaml::to_string(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
