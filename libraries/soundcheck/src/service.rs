/// Platform audio service abstraction
use crate::error::Result;
use crate::types::{DeviceId, VolumeReading};

/// Read-only queries against a platform audio service
///
/// Implementers answer property queries for devices they hand out. The probe
/// never holds a `DeviceId` longer than one call.
#[cfg_attr(test, mockall::automock)]
pub trait AudioService {
    /// Resolve the system's current default output device
    ///
    /// # Errors
    /// Returns an error if the service answers with a non-success status
    fn default_output_device(&self) -> Result<DeviceId>;

    /// Is the device streaming audio for any client?
    ///
    /// # Errors
    /// Returns an error if the running-state property cannot be read
    fn is_running(&self, device: DeviceId) -> Result<bool>;

    /// Does the device expose a scalar volume on its primary output channel?
    fn has_volume_property(&self, device: DeviceId) -> bool;

    /// Read the primary output channel's scalar volume (0.0 to 1.0)
    ///
    /// Only meaningful when [`has_volume_property`](Self::has_volume_property)
    /// returned `true`.
    ///
    /// # Errors
    /// Returns an error if the volume property cannot be read
    fn volume(&self, device: DeviceId) -> Result<f32>;
}

impl<T: AudioService + ?Sized> AudioService for &T {
    fn default_output_device(&self) -> Result<DeviceId> {
        (**self).default_output_device()
    }

    fn is_running(&self, device: DeviceId) -> Result<bool> {
        (**self).is_running(device)
    }

    fn has_volume_property(&self, device: DeviceId) -> bool {
        (**self).has_volume_property(device)
    }

    fn volume(&self, device: DeviceId) -> Result<f32> {
        (**self).volume(device)
    }
}

impl<T: AudioService + ?Sized> AudioService for Box<T> {
    fn default_output_device(&self) -> Result<DeviceId> {
        (**self).default_output_device()
    }

    fn is_running(&self, device: DeviceId) -> Result<bool> {
        (**self).is_running(device)
    }

    fn has_volume_property(&self, device: DeviceId) -> bool {
        (**self).has_volume_property(device)
    }

    fn volume(&self, device: DeviceId) -> Result<f32> {
        (**self).volume(device)
    }
}

/// Probe the volume capability and read it if present
pub fn read_volume<S: AudioService + ?Sized>(service: &S, device: DeviceId) -> VolumeReading {
    if !service.has_volume_property(device) {
        return VolumeReading::Unsupported;
    }

    match service.volume(device) {
        Ok(value) => VolumeReading::Level { value },
        Err(error) => VolumeReading::Failed { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Property, QueryError};
    use mockall::predicate::eq;

    const D1: DeviceId = DeviceId::new(1);

    #[test]
    fn test_read_volume_skips_read_without_property() {
        let mut service = MockAudioService::new();
        service
            .expect_has_volume_property()
            .with(eq(D1))
            .return_const(false);
        service.expect_volume().never();

        assert_eq!(read_volume(&service, D1), VolumeReading::Unsupported);
    }

    #[test]
    fn test_read_volume_returns_level() {
        let mut service = MockAudioService::new();
        service.expect_has_volume_property().return_const(true);
        service
            .expect_volume()
            .with(eq(D1))
            .times(1)
            .returning(|_| Ok(0.37));

        assert_eq!(read_volume(&service, D1), VolumeReading::Level { value: 0.37 });
    }

    #[test]
    fn test_read_volume_keeps_failure_distinct() {
        let err = QueryError::status(Property::VolumeScalar, -1);
        let mut service = MockAudioService::new();
        service.expect_has_volume_property().return_const(true);
        service.expect_volume().returning(move |_| Err(err));

        assert_eq!(read_volume(&service, D1), VolumeReading::Failed { error: err });
    }

    #[test]
    fn test_boxed_service_forwards() {
        let mut service = MockAudioService::new();
        service
            .expect_default_output_device()
            .returning(|| Ok(D1));
        let boxed: Box<dyn AudioService> = Box::new(service);

        assert_eq!(boxed.default_output_device(), Ok(D1));
    }
}
