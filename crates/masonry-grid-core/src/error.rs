use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasonryError {
    #[error("Invalid layout parameters: {0}")]
    InvalidParameters(String),
    #[error(
        "Invalid measurement for item {index}: primary height {primary_height}, annotation height {annotation_height}"
    )]
    InvalidMeasurement {
        index: usize,
        primary_height: f64,
        annotation_height: f64,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MasonryError>;
