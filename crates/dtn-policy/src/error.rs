use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown forwarding policy {0:?}: expected \"epidemic\", \"battery-aware\", or \"priority\"")]
    Unknown(String),
}
