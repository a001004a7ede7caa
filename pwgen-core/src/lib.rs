// File:    lib.rs
// Date:    2026-08-28
//
// Description: The main library crate for pwgen-core, providing random word selection, separator construction, and profile handling.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Passphrase Generator Core Library
//!
//! This library provides the core functionality for generating memorable
//! passphrases: a cryptographically secure random source, word-list loading
//! with length filtering, passphrase construction, and generation profiles.

/// YAML-backed profile configuration with load/save support.
pub mod config;
/// Cryptographically secure random integer source.
pub mod entropy;
/// Passphrase construction from words and random separators.
pub mod passphrase;
/// Generation profiles bundling all passphrase parameters.
pub mod profile;
/// Word-list loading with length-bounded filtering.
pub mod wordlist;
