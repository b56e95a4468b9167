//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings read from the process environment (and `.env`).
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `puzzles.ron`, `catalog.ron` or `shop.toml`.
    pub content_dir: Option<PathBuf>,
    /// Session seed; drawn from the OS RNG when unset.
    pub seed: Option<u64>,
    /// Directory for the log file; stderr only when unset.
    pub log_dir: Option<PathBuf>,
    /// `PHRASE_SEED` value that failed to parse, reported once logging is up.
    pub rejected_seed: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PHRASE_CONTENT_DIR` - Content directory (default: platform data dir if it exists)
    /// - `PHRASE_SEED` - RNG seed for reproducible sessions (default: random)
    /// - `PHRASE_LOG_DIR` - Write `client.log` here in addition to stderr
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.content_dir = env::var("PHRASE_CONTENT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(default_content_dir);

        config.seed = read_env::<u64>("PHRASE_SEED");
        if config.seed.is_none() {
            config.rejected_seed = env::var("PHRASE_SEED").ok();
        }

        config.log_dir = env::var("PHRASE_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Platform data directory, used only when it already exists.
fn default_content_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "phrase")?;
    let dir = dirs.data_dir().to_path_buf();
    dir.is_dir().then_some(dir)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
