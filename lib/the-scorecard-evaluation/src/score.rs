use crate::config::{ScoringConfig, Weights};
use crate::kpi::Kpi;
use crate::normalize::{NormalizedPlayerRecord, NEUTRAL_SCORE};

#[derive(Debug, Clone, PartialEq)]
pub struct FinalScoreRecord {
    pub record: NormalizedPlayerRecord,
    pub solo_score: f64,
    pub team_score: f64,
    /// Always `0.5 * solo_score + 0.5 * team_score`.
    pub overall_score: f64,
}

impl FinalScoreRecord {
    pub fn from_normalized(record: NormalizedPlayerRecord, config: &ScoringConfig) -> Self {
        let solo_score = weighted_sum(&record, &config.weights_solo);
        let team_score = weighted_sum(&record, &config.weights_team);
        Self {
            record,
            solo_score,
            team_score,
            overall_score: 0.5 * solo_score + 0.5 * team_score,
        }
    }

    pub fn puuid(&self) -> &str {
        &self.record.player.puuid
    }

    pub fn summoner_name(&self) -> &str {
        &self.record.player.summoner_name
    }

    pub fn kpi(&self, kpi: Kpi) -> f64 {
        self.record.player.kpis[kpi]
    }

    pub fn score(&self, kpi: Kpi) -> f64 {
        self.record.scores[kpi]
    }

    /// Header of the output table: identity, raw KPIs, KPI scores, then the
    /// three composite scores.
    pub fn columns() -> Vec<String> {
        let mut columns = vec!["puuid".to_string(), "summonerName".to_string()];
        columns.extend(Kpi::ALL.map(|kpi| kpi.name().to_string()));
        columns.extend(Kpi::ALL.map(Kpi::score_column));
        columns.extend(["solo_score", "team_score", "overall_score"].map(String::from));
        columns
    }

    /// Numeric cells following the two identity columns, in [`Self::columns`] order.
    pub fn values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = Kpi::ALL.map(|kpi| self.kpi(kpi)).to_vec();
        values.extend(Kpi::ALL.map(|kpi| self.score(kpi)));
        values.extend([self.solo_score, self.team_score, self.overall_score]);
        values
    }
}

/// `sum(weight * score)` over the weight set. A name with no matching score
/// contributes at the neutral 50.
pub fn weighted_sum(record: &NormalizedPlayerRecord, weights: &Weights) -> f64 {
    weights
        .iter()
        .map(|(name, weight)| {
            let score = name
                .parse::<Kpi>()
                .map(|kpi| record.scores[kpi])
                .unwrap_or(NEUTRAL_SCORE);
            weight * score
        })
        .sum()
}
