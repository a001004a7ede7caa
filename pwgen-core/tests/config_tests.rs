#![allow(missing_docs)]
use pwgen_core::config::{Config, ProfileConfig};
use pwgen_core::profile::ProfileError;

fn sample_profile_config() -> ProfileConfig {
    ProfileConfig {
        max_sep_length: 3,
        max_word_length: 9,
        min_sep_length: 3,
        min_word_length: 6,
        num_passwords: 5,
        suffix_sep_length: 0,
        symbols: "123456789!$%*@".to_string(),
        words_file: "words.txt".to_string(),
        words_per_password: 4,
    }
}

#[test]
fn config_round_trip_preserves_max_sep_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pwgen.yml");

    let mut config = Config::default();
    config.standard.max_sep_length = 3;
    config.save(&path).unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.standard.max_sep_length, 3);
}

#[test]
fn config_round_trip_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pwgen.yml");

    let config = Config {
        standard: sample_profile_config(),
        short: ProfileConfig {
            max_sep_length: 2,
            max_word_length: 5,
            min_sep_length: 2,
            min_word_length: 5,
            suffix_sep_length: 2,
            symbols: "#_123456789".to_string(),
            ..sample_profile_config()
        },
    };
    config.save(&path).unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn config_parses_the_documented_yaml_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pwgen.yml");
    std::fs::write(
        &path,
        "standard:\n\
         \x20 max_sep_length: 3\n\
         \x20 max_word_length: 9\n\
         \x20 min_sep_length: 3\n\
         \x20 min_word_length: 6\n\
         \x20 num_passwords: 5\n\
         \x20 suffix_sep_length: 0\n\
         \x20 symbols: \"123456789!$%*@\"\n\
         \x20 words_file: words.txt\n\
         \x20 words_per_password: 4\n\
         short:\n\
         \x20 max_sep_length: 2\n\
         \x20 max_word_length: 5\n\
         \x20 min_sep_length: 2\n\
         \x20 min_word_length: 5\n\
         \x20 num_passwords: 5\n\
         \x20 suffix_sep_length: 2\n\
         \x20 symbols: \"#_123456789\"\n\
         \x20 words_file: words.txt\n\
         \x20 words_per_password: 4\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.standard, sample_profile_config());
    assert_eq!(config.short.suffix_sep_length, 2);
    assert_eq!(config.short.symbols, "#_123456789");
}

#[test]
fn load_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load(&dir.path().join("absent.yml")).is_err());
}

#[test]
fn to_profile_validates_eagerly() {
    let entry = sample_profile_config();
    let profile = entry.to_profile().unwrap();
    assert_eq!(profile.min_word_length, 6);
    assert_eq!(profile.max_word_length, 9);
    assert_eq!(profile.symbols, "123456789!$%*@");

    let inverted = ProfileConfig {
        min_sep_length: 4,
        max_sep_length: 1,
        ..sample_profile_config()
    };
    assert_eq!(
        inverted.to_profile(),
        Err(ProfileError::InvertedSepBounds { min: 4, max: 1 })
    );
}
