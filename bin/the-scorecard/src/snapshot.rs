use anyhow::Context as _;
use std::path::Path;
use the_scorecard_evaluation::model::players_from_snapshot;
use the_scorecard_evaluation::PlayerEntry;
use tokio::fs::read_to_string;

/// Read the raw match snapshot produced by the collector.
pub async fn load(path: &Path) -> anyhow::Result<Vec<PlayerEntry>> {
    let contents = read_to_string(path)
        .await
        .with_context(|| format!("Failed to read raw snapshot {}", path.display()))?;
    parse(&contents).with_context(|| format!("Invalid raw snapshot {}", path.display()))
}

/// Only the top level is strict: it must be a JSON list. Entries that are not
/// players are dropped, as is anything malformed below them.
fn parse(contents: &str) -> anyhow::Result<Vec<PlayerEntry>> {
    let snapshot = serde_json::from_str(contents).context("Snapshot is not valid JSON")?;
    players_from_snapshot(snapshot).context("Snapshot is not a list of players")
}
