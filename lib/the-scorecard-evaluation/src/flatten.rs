use crate::config::ScoringConfig;
use crate::extract::extract_participant_kpis;
use crate::kpi::KpiValues;
use crate::model::PlayerEntry;
use crate::team::team_kills_by_team;
use tracing::debug;

/// KPIs of one player in one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchKpiRecord {
    pub puuid: String,
    pub summoner_name: String,
    pub match_id: Option<String>,
    pub kpis: KpiValues,
}

/// Flattens the snapshot into one row per (player, match).
///
/// Only the first `max_matches_per_player` matches of each entry are looked
/// at, in snapshot order. Matches without participants, or where the player
/// is not among the participants, produce no row.
pub fn flatten_records(players: &[PlayerEntry], config: &ScoringConfig) -> Vec<MatchKpiRecord> {
    let mut rows = Vec::new();
    for player in players {
        let Some(puuid) = player.puuid.as_deref() else {
            debug!("Skipping player entry without a PUUID");
            continue;
        };

        let matches = match config.match_limit() {
            Some(limit) => &player.matches[..player.matches.len().min(limit)],
            None => &player.matches[..],
        };

        for entry in matches {
            let participants = entry.participants();
            if participants.is_empty() {
                debug!("Skipping match {:?}: no participants", entry.id());
                continue;
            }

            let team_kills = team_kills_by_team(participants);
            let Some(me) = participants.iter().find(|p| p.puuid() == Some(puuid)) else {
                debug!("Skipping match {:?}: {puuid} did not participate", entry.id());
                continue;
            };

            rows.push(MatchKpiRecord {
                puuid: puuid.to_string(),
                summoner_name: player.display_name().to_string(),
                match_id: entry.id().map(str::to_string),
                kpis: extract_participant_kpis(me, &team_kills),
            });
        }
    }
    rows
}
