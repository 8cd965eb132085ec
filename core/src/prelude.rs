use std::path::PathBuf;

/// Number of forward gears carried by a parameter set.
pub const GEAR_COUNT: usize = 5;

/// Common error type for loading parameters and building curves.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    #[error("path \"{}\" not found", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("empty series: {0}")]
    EmptySeries(String),
}

pub type CurveResult<T> = Result<T, CurveError>;
