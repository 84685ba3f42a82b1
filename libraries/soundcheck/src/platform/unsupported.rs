// Targets without a supported audio service: every query fails closed.

use super::SystemAudio;
use crate::error::{QueryError, Result};
use crate::service::AudioService;
use crate::types::DeviceId;

impl AudioService for SystemAudio {
    fn default_output_device(&self) -> Result<DeviceId> {
        Err(QueryError::Unsupported)
    }

    fn is_running(&self, _device: DeviceId) -> Result<bool> {
        Err(QueryError::Unsupported)
    }

    fn has_volume_property(&self, _device: DeviceId) -> bool {
        false
    }

    fn volume(&self, _device: DeviceId) -> Result<f32> {
        Err(QueryError::Unsupported)
    }
}
