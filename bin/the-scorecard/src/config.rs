use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use the_scorecard_evaluation::ScoringConfig;
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub raw_json_path: PathBuf,
    pub processed_csv_path: PathBuf,
    /// Scores are only written to the database when this is set.
    pub database_url: Option<String>,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_json_path: PathBuf::from("data/raw/riot_raw.json"),
            processed_csv_path: PathBuf::from("data/processed/players_scores.csv"),
            database_url: None,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Environment variables take precedence over the config file.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(path) = var("RAW_JSON_PATH") {
            self.raw_json_path = path.into();
        }
        if let Some(path) = var("PROCESSED_CSV") {
            self.processed_csv_path = path.into();
        }
        if let Some(url) = var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(max) = var("MAX_MATCHES_PER_PLAYER") {
            self.scoring.max_matches_per_player = max
                .parse()
                .with_context(|| format!("MAX_MATCHES_PER_PLAYER is not a count: {max:?}"))?;
        }
        if let Some(mode) = var("NORMALIZATION") {
            self.scoring.normalization_mode = mode.parse()?;
        }
        Ok(())
    }
}
