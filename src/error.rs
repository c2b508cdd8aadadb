use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("degenerate value range: {0}")]
    DegenerateRange(String),

    #[error("insufficient bars: spacing needs at least two bars, got {count}")]
    InsufficientBars { count: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
