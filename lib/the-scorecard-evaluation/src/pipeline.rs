use crate::aggregate::aggregate_player_level;
use crate::config::ScoringConfig;
use crate::flatten::flatten_records;
use crate::model::PlayerEntry;
use crate::normalize::normalize;
use crate::score::FinalScoreRecord;
use tracing::info;

/// Scores every player of the snapshot. Pure: the same snapshot and
/// configuration always give the same table, empty at worst.
#[tracing::instrument(skip_all)]
pub fn run(players: &[PlayerEntry], config: &ScoringConfig) -> Vec<FinalScoreRecord> {
    let rows = flatten_records(players, config);
    info!("Flattened {} player entries into {} match rows", players.len(), rows.len());

    let aggregates = aggregate_player_level(&rows);
    info!("Aggregated {} players", aggregates.len());

    normalize(
        aggregates,
        &config.weighted_kpis(),
        config.normalization_mode,
    )
    .into_iter()
    .map(|record| FinalScoreRecord::from_normalized(record, config))
    .collect()
}
