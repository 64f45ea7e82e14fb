//! Volume transfer curves: slider position (UI space) <-> player volume.
//!
//! Both spaces are normalized to [0, 1]. Inputs outside that range are not
//! clamped; every curve extrapolates with its own formula.

use crate::db::{db_to_linear, db_to_nepers};
use crate::error::TransferError;

/// Default dB span of the logarithmic curve.
pub const DEFAULT_DB_RANGE: f64 = 50.0;

/// Conversion between slider position and player volume.
pub trait VolumeTransfer {
    /// Convert a slider position [0, 1] to a player volume [0, 1].
    fn slider_to_volume(&self, slider_position: f64) -> f64;

    /// Convert a player volume [0, 1] to a slider position [0, 1].
    fn volume_to_slider(&self, volume: f64) -> f64;
}

/// Direct 1:1 mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearVolumeTransfer;

impl VolumeTransfer for LinearVolumeTransfer {
    #[inline]
    fn slider_to_volume(&self, slider_position: f64) -> f64 {
        slider_position
    }

    #[inline]
    fn volume_to_slider(&self, volume: f64) -> f64 {
        volume
    }
}

/// Decibel-linear curve spanning `db_range` dB over the slider travel.
///
/// The raw exponential `10^((p - 1) * db_range / 20)` bottoms out at
/// `offset = 10^(-db_range / 20)` rather than zero, so it is shifted down by
/// `offset` and rescaled by `1 / (1 - offset)`. With `k = db_range * ln(10) / 20`
/// that simplifies to `expm1(k * p) / expm1(k)`, which stays exact at both
/// ends (slider 0 is silence, slider 1 is unity) even when `offset` rounds to
/// 0 or 1.
///
/// Ranges past roughly 6165 dB overflow `expm1(k)` and are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicVolumeTransfer {
    db_range: f64,
    offset: f64,
    /// Natural-log slope per unit of slider travel, `k`.
    rate: f64,
    /// `expm1(k)`, the unnormalized volume at slider 1.
    span: f64,
}

impl LogarithmicVolumeTransfer {
    /// Create a curve spanning `db_range` dB. Typical values are 40-60.
    pub fn new(db_range: f64) -> Result<Self, TransferError> {
        let rate = db_to_nepers(db_range);
        if !db_range.is_finite() || rate <= 0.0 || !rate.exp_m1().is_finite() {
            log::warn!("rejecting logarithmic volume transfer with dB range {db_range}");
            return Err(TransferError::InvalidDbRange(db_range));
        }
        Ok(Self::with_range(db_range))
    }

    fn with_range(db_range: f64) -> Self {
        let rate = db_to_nepers(db_range);
        let t = Self {
            db_range,
            offset: db_to_linear(-db_range),
            rate,
            span: rate.exp_m1(),
        };
        log::debug!("logarithmic volume transfer: range={db_range} dB, offset={:e}", t.offset);
        t
    }

    pub fn db_range(&self) -> f64 {
        self.db_range
    }

    /// Curve floor before rescaling, `10^(-db_range / 20)`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Attenuation in dB at `slider_position`, from `-db_range` at 0 up to 0 at 1.
    #[inline]
    pub fn slider_to_db(&self, slider_position: f64) -> f64 {
        (slider_position - 1.0) * self.db_range
    }
}

impl Default for LogarithmicVolumeTransfer {
    fn default() -> Self {
        Self::with_range(DEFAULT_DB_RANGE)
    }
}

impl VolumeTransfer for LogarithmicVolumeTransfer {
    #[inline]
    fn slider_to_volume(&self, slider_position: f64) -> f64 {
        (self.rate * slider_position).exp_m1() / self.span
    }

    /// Volumes below `-offset / (1 - offset)` have no real inverse and give NaN.
    #[inline]
    fn volume_to_slider(&self, volume: f64) -> f64 {
        (volume * self.span).ln_1p() / self.rate
    }
}

/// A transfer curve chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transfer {
    Linear(LinearVolumeTransfer),
    Logarithmic(LogarithmicVolumeTransfer),
}

impl Default for Transfer {
    fn default() -> Self {
        Transfer::Linear(LinearVolumeTransfer)
    }
}

impl From<LinearVolumeTransfer> for Transfer {
    fn from(t: LinearVolumeTransfer) -> Self {
        Transfer::Linear(t)
    }
}

impl From<LogarithmicVolumeTransfer> for Transfer {
    fn from(t: LogarithmicVolumeTransfer) -> Self {
        Transfer::Logarithmic(t)
    }
}

impl VolumeTransfer for Transfer {
    fn slider_to_volume(&self, slider_position: f64) -> f64 {
        match self {
            Transfer::Linear(t) => t.slider_to_volume(slider_position),
            Transfer::Logarithmic(t) => t.slider_to_volume(slider_position),
        }
    }

    fn volume_to_slider(&self, volume: f64) -> f64 {
        match self {
            Transfer::Linear(t) => t.volume_to_slider(volume),
            Transfer::Logarithmic(t) => t.volume_to_slider(volume),
        }
    }
}
