#![deny(missing_docs)]
//! A web server rendering freshly generated memorable passphrases as an
//! HTML page, with a strong and a short profile section.

use axum::{
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use log::error;
use pwgen_core::entropy::OsRandomSource;
use pwgen_core::passphrase::{self, BuildError};
use pwgen_core::profile::GenerationProfile;
use pwgen_core::wordlist;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_WORDS_FILE: &str = "/var/local/pwgen/words.txt";

/// Shared application state: the two immutable profiles and their
/// pre-loaded word lists. Read-only after startup, so handlers can share
/// it freely across concurrent requests.
struct AppState {
    standard: ProfileSet,
    short: ProfileSet,
}

/// One profile together with the word list loaded under its bounds.
struct ProfileSet {
    profile: GenerationProfile,
    words: Vec<String>,
}

impl ProfileSet {
    /// Builds the profile's generation parameters and eagerly loads its
    /// word list, aborting the process on any configuration or I/O error.
    fn load_or_exit(mut profile: GenerationProfile, words_file: &Path) -> Self {
        profile.words_file = words_file.to_path_buf();
        if let Err(e) = profile.validate() {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
        let words = wordlist::load(
            &profile.words_file,
            profile.min_word_length,
            profile.max_word_length,
        )
        .unwrap_or_else(|e| {
            eprintln!(
                "Failed to read words file '{}': {e}",
                profile.words_file.display()
            );
            std::process::exit(1);
        });
        Self { profile, words }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let port = 8080;
    // Word-list path from an environment variable or the packaged default.
    let words_file = env::var("PWGEN_WORDS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDS_FILE));

    let standard = ProfileSet::load_or_exit(GenerationProfile::standard(), &words_file);
    println!("Words loaded: {}", standard.words.len());
    let short = ProfileSet::load_or_exit(GenerationProfile::short(), &words_file);
    println!("Short words loaded: {}", short.words.len());

    let app_state = Arc::new(AppState { standard, short });

    let app = Router::new()
        .route("/", get(index_handler))
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on:");
    println!("  - http://0.0.0.0:{port}/");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Failed to bind port {port}: {e}");
            std::process::exit(1);
        });
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Serves the root page: both profiles' batches, regenerated fresh for
/// every request. A build failure degrades to a 500 page for that request
/// rather than taking down the server.
async fn index_handler(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> (StatusCode, Html<String>) {
    match render_page(&state) {
        Ok(page) => (StatusCode::OK, Html(page)),
        Err(e) => {
            error!("Failed to generate passwords: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<html><body><h1>Password generation failed</h1></body></html>".to_string()),
            )
        }
    }
}

/// Renders the full HTML document with one headed section per profile.
fn render_page(state: &AppState) -> Result<String, BuildError> {
    let mut page = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=us-ascii">
<title>Password Generator</title>
<style type="text/css">
  BODY {font-family: "Courier New", Courier, monospace;}
</style>
</head>

<body>
"#,
    );
    page.push_str("<h1>Strong Format Passwords</h1>\n");
    render_section(&mut page, &state.standard)?;
    page.push_str("<h1>Short Format Passwords</h1>\n");
    render_section(&mut page, &state.short)?;
    page.push_str("</body>\n</html>\n");
    Ok(page)
}

/// Appends one profile's freshly generated batch, `<br />`-separated.
fn render_section(page: &mut String, set: &ProfileSet) -> Result<(), BuildError> {
    let mut rng = OsRandomSource;
    for password in passphrase::build_batch(&set.profile, &set.words, &mut rng)? {
        page.push_str(&password);
        page.push_str("<br />\n");
    }
    Ok(())
}
