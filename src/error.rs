use std::fmt;

#[derive(Debug)]
pub enum TransferError {
    /// dB range was non-finite or not strictly positive.
    InvalidDbRange(f64),
    /// Malformed or unknown transfer configuration.
    Config(serde_json::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::InvalidDbRange(db) => {
                write!(f, "Invalid dB range {db}: must be a positive finite number")
            }
            TransferError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::InvalidDbRange(_) => None,
            TransferError::Config(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for TransferError {
    fn from(e: serde_json::Error) -> Self {
        TransferError::Config(e)
    }
}
