use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("degenerate range: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("radar layout requires at least one indicator")]
    EmptyIndicatorSet,

    #[error("radar geometry has not been resolved; call `update_center` first")]
    GeometryNotResolved,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid container size: width={width}, height={height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
