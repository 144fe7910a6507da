use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// One scored player as stored in the `players` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlayerScore {
    pub puuid: String,
    pub summoner_name: Option<String>,

    pub kda: f64,
    pub winrate: f64,
    pub dpm: f64,
    pub cs_per_min: f64,
    pub gpm: f64,
    pub solo_kills: f64,
    pub assists_per_game: f64,
    pub vision_per_min: f64,
    pub kill_participation: f64,
    pub team_damage_pct: f64,
    pub time_ccing_others: f64,
    pub objectives_taken: f64,

    pub kda_score: f64,
    pub winrate_score: f64,
    pub dpm_score: f64,
    pub cs_per_min_score: f64,
    pub gpm_score: f64,
    pub solo_kills_score: f64,
    pub assists_per_game_score: f64,
    pub vision_per_min_score: f64,
    pub kill_participation_score: f64,
    pub team_damage_pct_score: f64,
    pub time_ccing_others_score: f64,
    pub objectives_taken_score: f64,

    pub solo_score: f64,
    pub team_score: f64,
    pub overall_score: f64,

    pub update_time: NaiveDateTime,
}
