//! Phrase game client binary.
//!
//! Composition root: loads configuration from the environment, sets up
//! logging, loads content and runs the line-oriented game loop on stdin.
//!
//! # Examples
//!
//! ```bash
//! # Built-in content, reproducible session
//! PHRASE_SEED=7 cargo run -p phrase-client
//!
//! # Custom content and a log file
//! PHRASE_CONTENT_DIR=./data PHRASE_LOG_DIR=./logs cargo run -p phrase-client
//! ```
mod app;
mod config;
mod logging;

use anyhow::{Context, Result};
use phrase_content::{ContentFactory, GameContent};

use app::App;
use config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    if let Some(raw) = &config.rejected_seed {
        tracing::warn!(value = %raw, "ignoring PHRASE_SEED that is not a u64");
    }

    // 3. Load content
    let content = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir)
            .load()
            .with_context(|| format!("loading content from {}", dir.display()))?,
        None => GameContent::builtin()?,
    };

    // 4. Run
    let seed = config.seed_or_random();
    tracing::info!(seed, "starting session");
    let stdin = std::io::stdin();
    let mut app = App::new(content.into_session(seed), std::io::stdout().lock());
    app.run(stdin.lock())
}
