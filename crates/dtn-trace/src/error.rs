use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
