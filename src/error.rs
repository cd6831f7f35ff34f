use thiserror::Error;

use crate::core::asset::AssetError;

/// Errors surfaced by the demo binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {role} asset: {source}")]
    InvalidAsset {
        role: &'static str,
        #[source]
        source: AssetError,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
