use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("unknown battery: {0}")]
    UnknownBattery(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown indicator '{indicator_id}' for battery '{battery_id}'")]
    UnknownIndicator {
        battery_id: String,
        indicator_id: String,
    },

    #[error(transparent)]
    Core(#[from] cognita_core::error::CoreError),
}
