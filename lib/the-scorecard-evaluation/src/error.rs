use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown KPI: {0}")]
    UnknownKpi(String),
    #[error("unknown normalization mode {0:?}, expected minmax or zscore")]
    UnknownNormalizationMode(String),
}
