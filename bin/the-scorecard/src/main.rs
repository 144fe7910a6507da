use anyhow::Context as _;
use config::Config;
use the_scorecard_db::{DbHandler, SqlitePoolOptions};
use the_scorecard_evaluation::pipeline;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Loading raw snapshot from {}", config.raw_json_path.display());
    let players = snapshot::load(&config.raw_json_path).await?;

    let records = pipeline::run(&players, &config.scoring);

    report::write_csv(&config.processed_csv_path, &records)?;
    info!(
        "Scored {} players into {}",
        records.len(),
        config.processed_csv_path.display()
    );

    if let Some(database_url) = &config.database_url {
        info!("Setting up DB client");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        let db_handler = DbHandler::new(pool);
        db_handler
            .create_tables()
            .await
            .context("Failed to create tables")?;
        let written = db_handler
            .upsert_player_scores(&records)
            .await
            .context("Failed to upsert player scores")?;
        info!("Upserted {written} players into the database");
    }

    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
