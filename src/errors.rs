use thiserror::Error;

use crate::address::Address;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Malformed outline at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Address {address} is out of range: {reason}")]
    AddressOutOfRange { address: Address, reason: String },

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal outline operation failed: {0}")]
    Internal(String),
}

pub type OutlineResult<T> = Result<T, OutlineError>;
