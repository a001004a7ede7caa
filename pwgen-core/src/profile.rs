// File:    profile.rs
// Date:    2026-08-28
//
// Description: Defines generation profiles, the parameter bundles that shape every generated passphrase.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// An error raised when a profile's parameters are inconsistent.
///
/// These are configuration mistakes, detected eagerly before any
/// generation work begins, and are always fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// The minimum word length exceeds the maximum.
    #[error("minimum word length {min} exceeds maximum {max}")]
    InvertedWordBounds {
        /// The configured minimum word length.
        min: usize,
        /// The configured maximum word length.
        max: usize,
    },
    /// The minimum separator length exceeds the maximum.
    #[error("minimum separator length {min} exceeds maximum {max}")]
    InvertedSepBounds {
        /// The configured minimum separator length.
        min: usize,
        /// The configured maximum separator length.
        max: usize,
    },
    /// Fewer than one word per passphrase was requested.
    #[error("cannot specify less than one word per password")]
    NoWords,
    /// Fewer than one passphrase was requested.
    #[error("cannot specify less than one password")]
    NoPasswords,
}

/// The complete set of parameters for one passphrase-generation run.
///
/// A profile is constructed once, validated, and then passed by reference
/// into the loader and builder; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationProfile {
    /// Minimum word length (characters, inclusive).
    pub min_word_length: usize,
    /// Maximum word length (characters, inclusive).
    pub max_word_length: usize,
    /// Number of words in each passphrase.
    pub words_per_password: usize,
    /// Minimum inter-word separator length (inclusive).
    pub min_sep_length: usize,
    /// Maximum inter-word separator length (inclusive).
    pub max_sep_length: usize,
    /// Length of the trailing separator; zero disables it.
    pub suffix_sep_length: usize,
    /// The alphabet separator characters are drawn from.
    pub symbols: String,
    /// Path to the newline-delimited word-list file.
    pub words_file: PathBuf,
    /// Number of passphrases generated per run.
    pub num_passwords: usize,
}

impl GenerationProfile {
    /// The standard profile: four 6-9 letter words joined by three-symbol
    /// separators, no suffix.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            min_word_length: 6,
            max_word_length: 9,
            words_per_password: 4,
            min_sep_length: 3,
            max_sep_length: 3,
            suffix_sep_length: 0,
            symbols: "123456789!$%*@".to_string(),
            words_file: PathBuf::from("words.txt"),
            num_passwords: 5,
        }
    }

    /// The short profile: four 5-letter words with two-symbol separators
    /// and a two-symbol suffix.
    #[must_use]
    pub fn short() -> Self {
        Self {
            min_word_length: 5,
            max_word_length: 5,
            words_per_password: 4,
            min_sep_length: 2,
            max_sep_length: 2,
            suffix_sep_length: 2,
            symbols: "#_123456789".to_string(),
            words_file: PathBuf::from("words.txt"),
            num_passwords: 5,
        }
    }

    /// Sanity-checks the profile's parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if any length bound is inverted or a
    /// count is non-positive.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.min_word_length > self.max_word_length {
            return Err(ProfileError::InvertedWordBounds {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        if self.min_sep_length > self.max_sep_length {
            return Err(ProfileError::InvertedSepBounds {
                min: self.min_sep_length,
                max: self.max_sep_length,
            });
        }
        if self.words_per_password < 1 {
            return Err(ProfileError::NoWords);
        }
        if self.num_passwords < 1 {
            return Err(ProfileError::NoPasswords);
        }
        Ok(())
    }
}
