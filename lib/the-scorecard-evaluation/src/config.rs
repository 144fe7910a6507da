use crate::error::Error;
use crate::kpi::Kpi;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

pub const DEFAULT_MAX_MATCHES_PER_PLAYER: usize = 50;

/// How raw KPI values are mapped onto the 0..=100 score scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum NormalizationMode {
    #[default]
    #[serde(rename = "minmax", alias = "min-max", alias = "min_max")]
    MinMax,
    #[serde(rename = "zscore", alias = "z-score", alias = "z_score")]
    ZScore,
}

impl FromStr for NormalizationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minmax" | "min-max" | "min_max" => Ok(NormalizationMode::MinMax),
            "zscore" | "z-score" | "z_score" => Ok(NormalizationMode::ZScore),
            _ => Err(Error::UnknownNormalizationMode(s.to_string())),
        }
    }
}

/// Linear weights keyed by KPI name.
///
/// Names are kept as given: a name that is not a known KPI still takes part
/// in the weighted sum, scored at the neutral 50.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<String, f64>);

impl Weights {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Sum of all weights. Not enforced to be 1.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl<const N: usize> From<[(Kpi, f64); N]> for Weights {
    fn from(weights: [(Kpi, f64); N]) -> Self {
        Self(
            weights
                .into_iter()
                .map(|(kpi, weight)| (kpi.name().to_string(), weight))
                .collect(),
        )
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Weights {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, weight)| (name.to_string(), weight))
                .collect(),
        )
    }
}

/// Parameters of one scoring run. Passed by reference into every stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Matches kept per player, in snapshot order. 0 keeps all of them.
    pub max_matches_per_player: usize,
    pub weights_solo: Weights,
    pub weights_team: Weights,
    pub normalization_mode: NormalizationMode,
}

impl ScoringConfig {
    pub fn match_limit(&self) -> Option<usize> {
        (self.max_matches_per_player > 0).then_some(self.max_matches_per_player)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_matches_per_player: DEFAULT_MAX_MATCHES_PER_PLAYER,
            weights_solo: Weights::from([
                (Kpi::Kda, 0.25),
                (Kpi::Winrate, 0.20),
                (Kpi::Dpm, 0.20),
                (Kpi::CsPerMin, 0.15),
                (Kpi::Gpm, 0.15),
                (Kpi::SoloKills, 0.05),
            ]),
            weights_team: Weights::from([
                (Kpi::AssistsPerGame, 0.25),
                (Kpi::VisionPerMin, 0.20),
                (Kpi::KillParticipation, 0.20),
                (Kpi::TeamDamagePct, 0.20),
                (Kpi::TimeCcingOthers, 0.10),
                (Kpi::ObjectivesTaken, 0.05),
            ]),
            normalization_mode: NormalizationMode::MinMax,
        }
    }
}

impl ScoringConfig {
    /// KPIs that carry a weight in either profile. Only these are normalized;
    /// every other score stays at the neutral 50.
    pub fn weighted_kpis(&self) -> BTreeSet<Kpi> {
        self.weights_solo
            .names()
            .chain(self.weights_team.names())
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}
