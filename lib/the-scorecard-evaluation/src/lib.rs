//! Turns raw per-match telemetry into per-player composite scores.
//!
//! The stages run strictly in order, each producing a new table:
//! [`flatten`] (one row per player and match) → [`aggregate`] (per-player
//! means) → [`normalize`] (0..=100 per KPI) → [`score`] (solo, team and
//! overall composites). [`pipeline::run`] chains them.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod kpi;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod score;
pub mod team;

pub use config::{NormalizationMode, ScoringConfig, Weights};
pub use kpi::{Kpi, KpiValues};
pub use model::PlayerEntry;
pub use score::FinalScoreRecord;
