#![deny(missing_docs)]
//! A command-line passphrase generator producing batches of memorable,
//! word-based passwords from a cryptographically secure random source.

use clap::Parser;
use log::{error, info};
use pwgen_core::entropy::OsRandomSource;
use pwgen_core::profile::GenerationProfile;
use pwgen_core::{passphrase, wordlist};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generate shorter passwords
    #[arg(long)]
    short: bool,

    /// Number of passwords to generate
    #[arg(long, default_value_t = 5)]
    passwords: usize,

    /// Words file to populate the generator with
    #[arg(long, default_value = "words.txt")]
    file: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut profile = if cli.short {
        GenerationProfile::short()
    } else {
        GenerationProfile::standard()
    };
    profile.num_passwords = cli.passwords;
    profile.words_file = cli.file;

    if let Err(e) = profile.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let words = wordlist::load(
        &profile.words_file,
        profile.min_word_length,
        profile.max_word_length,
    )
    .unwrap_or_else(|e| {
        error!(
            "Failed to read words file '{}': {e}",
            profile.words_file.display()
        );
        std::process::exit(1);
    });
    info!("Words loaded: {}", words.len());

    let mut rng = OsRandomSource;
    match passphrase::build_batch(&profile, &words, &mut rng) {
        Ok(passwords) => {
            for password in passwords {
                println!("{password}");
            }
        }
        Err(e) => {
            error!("Failed to generate passwords: {e}");
            std::process::exit(1);
        }
    }
}
