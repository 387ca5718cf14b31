use dtn_core::DtnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("timeline is empty: no trace records were loaded")]
    EmptyTimeline,

    #[error("timeline has {timestamps} timestamp(s); at least 2 are required")]
    TimelineTooShort { timestamps: usize },

    #[error(transparent)]
    Config(#[from] DtnError),
}

pub type SimResult<T> = Result<T, SimError>;
