use chrono::Utc;
use error::Error;
use sqlx::{Pool, Sqlite};
use the_scorecard_evaluation::FinalScoreRecord;
use tracing::debug;

// Re-export so that clients can avoid having sqlx as a dependency
pub use sqlx::sqlite::SqlitePoolOptions;

pub mod error;
pub mod model;

/// Composite score a leaderboard can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreKind {
    #[default]
    Overall,
    Solo,
    Team,
}

impl ScoreKind {
    fn column(self) -> &'static str {
        match self {
            ScoreKind::Overall => "overall_score",
            ScoreKind::Solo => "solo_score",
            ScoreKind::Team => "team_score",
        }
    }
}

/// Wrapper around the score store. Rows are keyed by PUUID, so each run
/// replaces the previous scores of the players it covers and leaves the
/// others untouched.
#[derive(Debug)]
pub struct DbHandler {
    pool: Pool<Sqlite>,
}

impl DbHandler {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create the `players` table and its indices if they do not exist yet.
    pub async fn create_tables(&self) -> Result<(), Error> {
        let columns: Vec<String> = score_columns()
            .into_iter()
            .map(|column| format!("{column} REAL NOT NULL"))
            .collect();
        let create_table = format!(
            "CREATE TABLE IF NOT EXISTS players (
                puuid TEXT PRIMARY KEY NOT NULL,
                summoner_name TEXT,
                {},
                update_time DATETIME NOT NULL
            )",
            columns.join(",\n")
        );
        sqlx::query(&create_table).execute(&self.pool).await?;

        for statement in [
            "CREATE INDEX IF NOT EXISTS ix_players_overall_desc ON players (overall_score DESC)",
            "CREATE INDEX IF NOT EXISTS ix_players_team_desc ON players (team_score DESC)",
            "CREATE INDEX IF NOT EXISTS ix_players_solo_desc ON players (solo_score DESC)",
            "CREATE INDEX IF NOT EXISTS ix_players_name ON players (summoner_name)",
        ] {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert or replace the scores of every record in one transaction.
    /// Returns the number of rows written.
    pub async fn upsert_player_scores(&self, records: &[FinalScoreRecord]) -> Result<u64, Error> {
        let columns = score_columns();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let updates: Vec<String> = columns
            .iter()
            .map(String::as_str)
            .chain(["summoner_name", "update_time"])
            .map(|column| format!("{column} = excluded.{column}"))
            .collect();
        let statement = format!(
            "INSERT INTO players (puuid, summoner_name, {}, update_time)
            VALUES (?, ?, {placeholders}, ?)
            ON CONFLICT(puuid) DO UPDATE SET {}",
            columns.join(", "),
            updates.join(", ")
        );

        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;
        let mut written = 0;
        for record in records {
            let mut query = sqlx::query(&statement)
                .bind(record.puuid())
                .bind(Some(record.summoner_name()).filter(|name| !name.is_empty()));
            for value in record.values() {
                query = query.bind(value);
            }
            written += query.bind(now).execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        debug!("Upserted {written} player score rows");
        Ok(written)
    }

    /// Get the stored scores of a player given the PUUID.
    pub async fn get_player(&self, puuid: &str) -> Result<Option<model::PlayerScore>, Error> {
        let player =
            sqlx::query_as::<_, model::PlayerScore>("SELECT * FROM players WHERE puuid = ?")
                .bind(puuid)
                .fetch_optional(&self.pool)
                .await?;
        Ok(player)
    }

    /// Get up to `limit` players ordered by the given score, best first.
    pub async fn get_leaderboard(
        &self,
        kind: ScoreKind,
        limit: u32,
    ) -> Result<Vec<model::PlayerScore>, Error> {
        let statement = format!(
            "SELECT * FROM players ORDER BY {} DESC, puuid ASC LIMIT ?",
            kind.column()
        );
        let players = sqlx::query_as::<_, model::PlayerScore>(&statement)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(players)
    }
}

/// Numeric columns of the table, in [`FinalScoreRecord::values`] order.
fn score_columns() -> Vec<String> {
    FinalScoreRecord::columns()
        .into_iter()
        .skip(2)
        .collect()
}
