//! Per-match KPI extraction.
//!
//! Every KPI is described by an ordered list of [`Source`]s. The first source
//! that yields a value wins, so a precomputed challenge value shadows the raw
//! derivation listed after it, and adding a new data source means adding one
//! entry to a list.

use crate::kpi::{Kpi, KpiValues};
use crate::model::Participant;
use std::collections::HashMap;

/// Everything a [`Source`] can read for one participant in one match.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub participant: &'a Participant,
    pub team_kills: &'a HashMap<i64, f64>,
}

impl ExtractionContext<'_> {
    fn minutes_played(&self) -> f64 {
        f64::max(1.0, self.participant.time_played_secs() / 60.0)
    }

    fn team_kills(&self) -> f64 {
        self.team_kills
            .get(&self.participant.team_id())
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// Precomputed value from the `challenges` map, taken as-is.
    Challenge(&'static str),
    /// Raw top-level field.
    Field(&'static str),
    /// Sum of raw fields divided by minutes played. Matches under a minute
    /// count as one minute.
    PerMinute(&'static [&'static str]),
    /// Sum of raw fields. Each term lists alternate names for the same
    /// counter, first present wins; a term with no present name counts as 0.
    Sum(&'static [&'static [&'static str]]),
    /// `(kills + assists) / max(1, deaths)`.
    Kda,
    /// `(kills + assists) / max(1, team kills)`. Not clamped to 1.
    KillParticipation,
    /// 1 for a win, 0 otherwise.
    Win,
    Constant(f64),
}

impl Source {
    /// Value of this source, `None` when it is unavailable or does not come
    /// out finite.
    pub fn resolve(&self, ctx: &ExtractionContext<'_>) -> Option<f64> {
        self.compute(ctx).filter(|value| value.is_finite())
    }

    fn compute(&self, ctx: &ExtractionContext<'_>) -> Option<f64> {
        let p = ctx.participant;
        match *self {
            Source::Challenge(key) => p.challenge(key),
            Source::Field(key) => p.field(key),
            Source::PerMinute(keys) => {
                let total: f64 = keys.iter().filter_map(|key| p.field(key)).sum();
                Some(total / ctx.minutes_played())
            }
            Source::Sum(terms) => Some(
                terms
                    .iter()
                    .filter_map(|aliases| aliases.iter().find_map(|key| p.field(key)))
                    .sum(),
            ),
            Source::Kda => Some((p.kills() + p.assists()) / f64::max(1.0, p.deaths())),
            Source::KillParticipation => {
                Some((p.kills() + p.assists()) / f64::max(1.0, ctx.team_kills()))
            }
            Source::Win => Some(if p.win() { 1.0 } else { 0.0 }),
            Source::Constant(value) => Some(value),
        }
    }
}

/// Ordered extraction sources for a KPI at match level.
pub fn sources(kpi: Kpi) -> &'static [Source] {
    use Source::*;
    match kpi {
        Kpi::Kda => &[Kda],
        Kpi::Winrate => &[Win],
        Kpi::Dpm => &[
            Challenge("damagePerMinute"),
            PerMinute(&["totalDamageDealtToChampions"]),
        ],
        Kpi::CsPerMin => &[PerMinute(&["totalMinionsKilled", "neutralMinionsKilled"])],
        Kpi::Gpm => &[Challenge("goldPerMinute"), PerMinute(&["goldEarned"])],
        Kpi::SoloKills => &[Challenge("soloKills"), Field("soloKills"), Constant(0.0)],
        Kpi::AssistsPerGame => &[Field("assists"), Constant(0.0)],
        Kpi::VisionPerMin => &[
            Challenge("visionScorePerMinute"),
            PerMinute(&["visionScore"]),
        ],
        Kpi::KillParticipation => &[KillParticipation],
        Kpi::TeamDamagePct => &[Challenge("teamDamagePercentage"), Constant(0.0)],
        Kpi::TimeCcingOthers => &[Field("timeCCingOthers"), Constant(0.0)],
        Kpi::ObjectivesTaken => &[Sum(&[
            &["dragonKills"],
            &["baronKills"],
            &["riftHeraldTakedowns"],
            &["turretTakedowns", "turretKills"],
        ])],
    }
}

/// Derives all match-level KPIs for one participant. Never fails: a KPI with
/// no usable source is 0.
pub fn extract_participant_kpis(
    participant: &Participant,
    team_kills: &HashMap<i64, f64>,
) -> KpiValues {
    let ctx = ExtractionContext {
        participant,
        team_kills,
    };
    Kpi::ALL
        .into_iter()
        .map(|kpi| {
            let value = sources(kpi)
                .iter()
                .find_map(|source| source.resolve(&ctx))
                .unwrap_or_default();
            (kpi, value)
        })
        .collect()
}
