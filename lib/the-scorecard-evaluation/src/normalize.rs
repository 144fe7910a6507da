//! Mapping of player-level KPI means onto a 0..=100 scale.
//!
//! Both strategies are relative to the players of the current run: adding or
//! removing a player moves everyone else's scores.

use crate::aggregate::PlayerAggregate;
use crate::config::NormalizationMode;
use crate::kpi::{Kpi, KpiValues};
use std::collections::BTreeSet;

/// Score given to every player when a column cannot discriminate between them.
pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPlayerRecord {
    pub player: PlayerAggregate,
    /// Always within 0..=100.
    pub scores: KpiValues,
}

/// `(v - min) / (max - min) * 100`. A column without spread maps to 50.
pub fn minmax_norm(values: &[f64]) -> Vec<f64> {
    let (lo, hi) = bounds(values);
    if hi == lo {
        return vec![NEUTRAL_SCORE; values.len()];
    }
    values
        .iter()
        .map(|v| bounded((v - lo) / (hi - lo) * 100.0))
        .collect()
}

/// `50 + 10 * z`, clipped to 0..=100, with `z` taken against the population
/// standard deviation. A column without spread maps to 50.
pub fn zscore_norm(values: &[f64]) -> Vec<f64> {
    let (lo, hi) = bounds(values);
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let stddev = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    // Equal values can still leave rounding noise in the mean, hence the bounds check.
    if hi == lo || stddev == 0.0 {
        return vec![NEUTRAL_SCORE; values.len()];
    }
    values
        .iter()
        .map(|v| bounded(NEUTRAL_SCORE + 10.0 * (v - mean) / stddev))
        .collect()
}

/// Clamps into 0..=100. Overflow in the column statistics can leave NaN,
/// which scores as neutral.
fn bounded(score: f64) -> f64 {
    if score.is_nan() {
        NEUTRAL_SCORE
    } else {
        score.clamp(0.0, 100.0)
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

impl NormalizationMode {
    pub fn apply(self, values: &[f64]) -> Vec<f64> {
        match self {
            NormalizationMode::MinMax => minmax_norm(values),
            NormalizationMode::ZScore => zscore_norm(values),
        }
    }
}

/// Scores the requested KPI columns independently; the others get 50.
pub fn normalize(
    players: Vec<PlayerAggregate>,
    columns: &BTreeSet<Kpi>,
    mode: NormalizationMode,
) -> Vec<NormalizedPlayerRecord> {
    let mut scores = vec![KpiValues::splat(NEUTRAL_SCORE); players.len()];
    for &kpi in columns {
        let column: Vec<f64> = players.iter().map(|player| player.kpis[kpi]).collect();
        for (row, score) in scores.iter_mut().zip(mode.apply(&column)) {
            row[kpi] = score;
        }
    }

    players
        .into_iter()
        .zip(scores)
        .map(|(player, scores)| NormalizedPlayerRecord { player, scores })
        .collect()
}
