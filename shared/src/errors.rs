use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    #[error("Unknown region code: {0}")]
    Unknown(String),
}
