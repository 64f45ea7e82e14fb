//! Serializable description of a transfer curve.
//!
//! Maps directly to the JSON (or JS object) a host passes in:
//!
//! ```json
//! { "type": "logarithmic", "dbRange": 40 }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransferError;
use crate::transfer::{DEFAULT_DB_RANGE, LinearVolumeTransfer, LogarithmicVolumeTransfer, Transfer};

/// Which curve to build, plus its parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransferConfig {
    #[default]
    Linear,
    Logarithmic {
        /// Total dB span across the slider travel.
        #[serde(rename = "dbRange", default = "default_db_range")]
        db_range: f64,
    },
}

fn default_db_range() -> f64 {
    DEFAULT_DB_RANGE
}

impl TransferConfig {
    pub fn from_json(json: &str) -> Result<Self, TransferError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("invalid volume transfer config: {e}");
            TransferError::from(e)
        })
    }

    pub fn to_json(&self) -> Result<String, TransferError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the parameters and construct the curve.
    pub fn build(&self) -> Result<Transfer, TransferError> {
        match *self {
            TransferConfig::Linear => Ok(Transfer::Linear(LinearVolumeTransfer)),
            TransferConfig::Logarithmic { db_range } => {
                Ok(Transfer::Logarithmic(LogarithmicVolumeTransfer::new(db_range)?))
            }
        }
    }
}

impl Transfer {
    /// The configuration that rebuilds this curve.
    pub fn config(&self) -> TransferConfig {
        match self {
            Transfer::Linear(_) => TransferConfig::Linear,
            Transfer::Logarithmic(t) => TransferConfig::Logarithmic {
                db_range: t.db_range(),
            },
        }
    }
}

impl FromStr for Transfer {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransferConfig::from_json(s)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::VolumeTransfer;

    #[test]
    fn parses_linear() {
        let cfg = TransferConfig::from_json(r#"{"type":"linear"}"#).unwrap();
        assert_eq!(cfg, TransferConfig::Linear);
        assert!(matches!(cfg.build().unwrap(), Transfer::Linear(_)));
    }

    #[test]
    fn parses_logarithmic_with_range() {
        let cfg = TransferConfig::from_json(r#"{"type":"logarithmic","dbRange":40}"#).unwrap();
        assert_eq!(cfg, TransferConfig::Logarithmic { db_range: 40.0 });
        match cfg.build().unwrap() {
            Transfer::Logarithmic(t) => assert_eq!(t.db_range(), 40.0),
            other => panic!("expected logarithmic, got {other:?}"),
        }
    }

    #[test]
    fn logarithmic_range_defaults_to_fifty() {
        let cfg = TransferConfig::from_json(r#"{"type":"logarithmic"}"#).unwrap();
        assert_eq!(cfg, TransferConfig::Logarithmic { db_range: 50.0 });
        assert_eq!(
            cfg.build().unwrap(),
            Transfer::Logarithmic(LogarithmicVolumeTransfer::default())
        );
    }

    #[test]
    fn unknown_type_is_config_error() {
        let err = TransferConfig::from_json(r#"{"type":"cubic"}"#).unwrap_err();
        assert!(matches!(err, TransferError::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn bad_range_fails_at_build() {
        let cfg = TransferConfig::from_json(r#"{"type":"logarithmic","dbRange":-3}"#).unwrap();
        let err = cfg.build().unwrap_err();
        assert!(matches!(err, TransferError::InvalidDbRange(r) if r == -3.0));
    }

    #[test]
    fn config_survives_json() {
        let t: Transfer = r#"{"type":"logarithmic","dbRange":60}"#.parse().unwrap();
        let json = t.config().to_json().unwrap();
        let again: Transfer = json.parse().unwrap();
        assert_eq!(t, again);
        assert_eq!(
            TransferConfig::Linear.to_json().unwrap(),
            r#"{"type":"linear"}"#
        );
    }

    #[test]
    fn parsed_transfer_converts() {
        let t: Transfer = r#"{"type":"linear"}"#.parse().unwrap();
        assert_eq!(t.slider_to_volume(0.42), 0.42);
    }
}
