use crate::config::ConfigError;
use thiserror::Error;
use wavebridge_codec::{DecodeError, EncodeError};

/// Any failure of one request/response cycle
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
