use anyhow::Context as _;
use std::io::Write;
use std::path::Path;
use the_scorecard_evaluation::FinalScoreRecord;

/// Write the scored table as CSV, one row per player, creating parent
/// directories as needed.
pub fn write_csv(path: &Path, records: &[FinalScoreRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_records(file, records).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_records(output: impl Write, records: &[FinalScoreRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(FinalScoreRecord::columns())?;
    for record in records {
        let mut row = vec![record.puuid().to_string(), record.summoner_name().to_string()];
        row.extend(record.values().iter().map(f64::to_string));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
