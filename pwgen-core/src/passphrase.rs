// File:    passphrase.rs
// Date:    2026-08-28
//
// Description: Builds passphrases by joining randomly selected capitalized words with random separator runs.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::entropy::{EntropyError, RandomSource};
use crate::profile::GenerationProfile;
use thiserror::Error;

/// An error raised while constructing a passphrase.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The word list contains no eligible words.
    #[error("word list is empty; no words satisfied the length bounds")]
    EmptyWordList,
    /// A non-empty separator was required but the symbol alphabet is empty.
    #[error("symbol alphabet is empty but a separator is required")]
    EmptySymbols,
    /// The secure random source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Uppercases the first character of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Builds one separator run of random length within `[min_len, max_len]`,
/// each character drawn independently from `symbols` with replacement.
fn separator(
    min_len: usize,
    max_len: usize,
    symbols: &[char],
    rng: &mut dyn RandomSource,
) -> Result<String, BuildError> {
    // If min and max lengths are the same, there's no point drawing a
    // random number between n and n.
    let sep_len = if min_len == max_len {
        min_len
    } else {
        min_len + rng.uniform_int((max_len - min_len + 1) as u64)? as usize
    };
    if sep_len > 0 && symbols.is_empty() {
        return Err(BuildError::EmptySymbols);
    }
    let mut sep = String::with_capacity(sep_len);
    for _ in 0..sep_len {
        let idx = rng.uniform_int(symbols.len() as u64)? as usize;
        sep.push(symbols[idx]);
    }
    Ok(sep)
}

/// Builds a single passphrase according to `profile`.
///
/// Each of the profile's `words_per_password` words is chosen uniformly at
/// random from `words`, capitalized, and followed by a random separator.
/// If `suffix_sep_length` is positive, one further fixed-length separator
/// is appended.
///
/// # Errors
///
/// Returns [`BuildError::EmptyWordList`] if `words` is empty,
/// [`BuildError::EmptySymbols`] if a non-empty separator is needed from an
/// empty alphabet, and propagates any failure of the random source.
pub fn build_one(
    profile: &GenerationProfile,
    words: &[String],
    rng: &mut dyn RandomSource,
) -> Result<String, BuildError> {
    if words.is_empty() {
        return Err(BuildError::EmptyWordList);
    }
    let symbols: Vec<char> = profile.symbols.chars().collect();

    let mut password = String::new();
    for _ in 0..profile.words_per_password {
        let idx = rng.uniform_int(words.len() as u64)? as usize;
        password.push_str(&capitalize(&words[idx]));
        password.push_str(&separator(
            profile.min_sep_length,
            profile.max_sep_length,
            &symbols,
            rng,
        )?);
    }
    // Add extra separator characters to the end of the password.
    if profile.suffix_sep_length > 0 {
        password.push_str(&separator(
            profile.suffix_sep_length,
            profile.suffix_sep_length,
            &symbols,
            rng,
        )?);
    }
    Ok(password)
}

/// Builds the profile's full batch of `num_passwords` passphrases.
///
/// # Errors
///
/// Propagates the first [`BuildError`] from [`build_one`]; no partial
/// batch is returned.
pub fn build_batch(
    profile: &GenerationProfile,
    words: &[String],
    rng: &mut dyn RandomSource,
) -> Result<Vec<String>, BuildError> {
    let mut passwords = Vec::with_capacity(profile.num_passwords);
    for _ in 0..profile.num_passwords {
        passwords.push(build_one(profile, words, rng)?);
    }
    Ok(passwords)
}
