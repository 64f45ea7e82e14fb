pub mod config;
pub mod db;
pub mod error;
pub mod transfer;

pub use config::TransferConfig;
pub use error::TransferError;
pub use transfer::{LinearVolumeTransfer, LogarithmicVolumeTransfer, Transfer, VolumeTransfer};

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the volume_transfer version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed transfer curve, used by the player's volume slider.
#[wasm_bindgen(js_name = VolumeTransfer)]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsVolumeTransfer {
    inner: Transfer,
}

#[wasm_bindgen(js_class = VolumeTransfer)]
impl JsVolumeTransfer {
    /// Direct 1:1 slider-to-volume mapping.
    pub fn linear() -> JsVolumeTransfer {
        JsVolumeTransfer {
            inner: Transfer::Linear(LinearVolumeTransfer),
        }
    }

    /// Decibel curve spanning `dbRange` dB (default 50).
    pub fn logarithmic(db_range: Option<f64>) -> Result<JsVolumeTransfer, JsValue> {
        let t = match db_range {
            Some(db) => LogarithmicVolumeTransfer::new(db)
                .map_err(|e| JsValue::from_str(&format!("{e}")))?,
            None => LogarithmicVolumeTransfer::default(),
        };
        Ok(JsVolumeTransfer {
            inner: Transfer::Logarithmic(t),
        })
    }

    /// Build from a `{ type, dbRange? }` object.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<JsVolumeTransfer, JsValue> {
        let config: TransferConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("{e}")))?;
        JsVolumeTransfer::try_from(config).map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    /// The `{ type, dbRange? }` object that rebuilds this curve.
    #[wasm_bindgen(js_name = toConfig)]
    pub fn to_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.config())
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    /// dB span of a logarithmic curve; `undefined` for linear.
    #[wasm_bindgen(getter, js_name = dbRange)]
    pub fn db_range(&self) -> Option<f64> {
        match self.inner {
            Transfer::Logarithmic(t) => Some(t.db_range()),
            Transfer::Linear(_) => None,
        }
    }

    /// Curve floor `10^(-dbRange / 20)` of a logarithmic curve; `undefined` for linear.
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> Option<f64> {
        match self.inner {
            Transfer::Logarithmic(t) => Some(t.offset()),
            Transfer::Linear(_) => None,
        }
    }

    #[wasm_bindgen(js_name = sliderToVolume)]
    pub fn slider_to_volume(&self, slider_position: f64) -> f64 {
        self.inner.slider_to_volume(slider_position)
    }

    #[wasm_bindgen(js_name = volumeToSlider)]
    pub fn volume_to_slider(&self, volume: f64) -> f64 {
        self.inner.volume_to_slider(volume)
    }
}

impl JsVolumeTransfer {
    /// The configuration `toConfig` hands to JS.
    pub fn config(&self) -> TransferConfig {
        self.inner.config()
    }
}

impl From<Transfer> for JsVolumeTransfer {
    fn from(inner: Transfer) -> Self {
        JsVolumeTransfer { inner }
    }
}

impl TryFrom<TransferConfig> for JsVolumeTransfer {
    type Error = TransferError;

    fn try_from(config: TransferConfig) -> Result<Self, Self::Error> {
        Ok(JsVolumeTransfer {
            inner: config.build()?,
        })
    }
}
