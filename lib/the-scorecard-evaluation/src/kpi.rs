use crate::error::Error;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Player-level key performance indicators, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kpi {
    Kda,
    Winrate,
    Dpm,
    CsPerMin,
    Gpm,
    SoloKills,
    AssistsPerGame,
    VisionPerMin,
    KillParticipation,
    TeamDamagePct,
    TimeCcingOthers,
    ObjectivesTaken,
}

impl Kpi {
    pub const COUNT: usize = 12;

    pub const ALL: [Kpi; Self::COUNT] = [
        Kpi::Kda,
        Kpi::Winrate,
        Kpi::Dpm,
        Kpi::CsPerMin,
        Kpi::Gpm,
        Kpi::SoloKills,
        Kpi::AssistsPerGame,
        Kpi::VisionPerMin,
        Kpi::KillParticipation,
        Kpi::TeamDamagePct,
        Kpi::TimeCcingOthers,
        Kpi::ObjectivesTaken,
    ];

    /// Column name of the player-level mean.
    pub fn name(self) -> &'static str {
        match self {
            Kpi::Kda => "kda",
            Kpi::Winrate => "winrate",
            Kpi::Dpm => "dpm",
            Kpi::CsPerMin => "cs_per_min",
            Kpi::Gpm => "gpm",
            Kpi::SoloKills => "solo_kills",
            Kpi::AssistsPerGame => "assists_per_game",
            Kpi::VisionPerMin => "vision_per_min",
            Kpi::KillParticipation => "kill_participation",
            Kpi::TeamDamagePct => "team_damage_pct",
            Kpi::TimeCcingOthers => "time_ccing_others",
            Kpi::ObjectivesTaken => "objectives_taken",
        }
    }

    /// Column name of the normalized score.
    pub fn score_column(self) -> String {
        format!("{}_score", self.name())
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl Display for Kpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kpi {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kpi::ALL
            .into_iter()
            .find(|kpi| kpi.name() == s)
            .ok_or_else(|| Error::UnknownKpi(s.to_string()))
    }
}

/// One value per [`Kpi`], indexable by the KPI itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KpiValues([f64; Kpi::COUNT]);

impl KpiValues {
    pub fn splat(value: f64) -> Self {
        Self([value; Kpi::COUNT])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Kpi, f64)> + '_ {
        Kpi::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl FromIterator<(Kpi, f64)> for KpiValues {
    fn from_iter<I: IntoIterator<Item = (Kpi, f64)>>(iter: I) -> Self {
        let mut values = Self::default();
        for (kpi, value) in iter {
            values[kpi] = value;
        }
        values
    }
}

impl Index<Kpi> for KpiValues {
    type Output = f64;

    fn index(&self, kpi: Kpi) -> &f64 {
        &self.0[kpi.position()]
    }
}

impl IndexMut<Kpi> for KpiValues {
    fn index_mut(&mut self, kpi: Kpi) -> &mut f64 {
        &mut self.0[kpi.position()]
    }
}
