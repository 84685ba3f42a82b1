// soundcheck/src/platform/coreaudio.rs
//
// Core Audio HAL backend (macOS)
//
// Three properties are read, all synchronously through AudioObjectGetPropertyData:
// - kAudioHardwarePropertyDefaultOutputDevice on the system object (global scope)
// - kAudioDevicePropertyDeviceIsRunningSomewhere on the device (output scope)
// - kAudioDevicePropertyVolumeScalar on the device (output scope, channel 0)

#![allow(unsafe_code)]

use std::mem;
use std::ptr;

use coreaudio_sys::{
    kAudioDevicePropertyDeviceIsRunningSomewhere, kAudioDevicePropertyScopeOutput,
    kAudioDevicePropertyVolumeScalar, kAudioHardwarePropertyDefaultOutputDevice,
    kAudioObjectPropertyScopeGlobal, kAudioObjectSystemObject, kAudioObjectUnknown,
    AudioDeviceID, AudioObjectGetPropertyData, AudioObjectHasProperty, AudioObjectID,
    AudioObjectPropertyAddress, AudioObjectPropertyElement, Float32, OSStatus, UInt32,
};

use super::SystemAudio;
use crate::error::{Property, QueryError, Result};
use crate::service::AudioService;
use crate::types::DeviceId;

/// Element addressing the device as a whole
const MAIN_ELEMENT: AudioObjectPropertyElement = 0;

/// Element addressing the left channel of a multi-channel property
const LEFT_CHANNEL: AudioObjectPropertyElement = 0;

const NO_ERR: OSStatus = 0;

impl AudioService for SystemAudio {
    fn default_output_device(&self) -> Result<DeviceId> {
        let address = AudioObjectPropertyAddress {
            mSelector: kAudioHardwarePropertyDefaultOutputDevice,
            mScope: kAudioObjectPropertyScopeGlobal,
            mElement: MAIN_ELEMENT,
        };

        let device: AudioDeviceID = get_property(
            kAudioObjectSystemObject,
            &address,
            Property::DefaultOutputDevice,
            kAudioObjectUnknown,
        )?;

        Ok(DeviceId::new(device))
    }

    fn is_running(&self, device: DeviceId) -> Result<bool> {
        let address = AudioObjectPropertyAddress {
            mSelector: kAudioDevicePropertyDeviceIsRunningSomewhere,
            mScope: kAudioDevicePropertyScopeOutput,
            mElement: MAIN_ELEMENT,
        };

        let running: UInt32 = get_property(
            device.raw(),
            &address,
            Property::DeviceIsRunningSomewhere,
            0,
        )?;

        Ok(running != 0)
    }

    fn has_volume_property(&self, device: DeviceId) -> bool {
        let address = volume_address();
        // SAFETY: `address` is a valid property address that outlives the call.
        unsafe { AudioObjectHasProperty(device.raw(), &address) != 0 }
    }

    fn volume(&self, device: DeviceId) -> Result<f32> {
        let address = volume_address();
        let volume: Float32 = get_property(device.raw(), &address, Property::VolumeScalar, 0.0)?;
        Ok(volume)
    }
}

fn volume_address() -> AudioObjectPropertyAddress {
    AudioObjectPropertyAddress {
        mSelector: kAudioDevicePropertyVolumeScalar,
        mScope: kAudioDevicePropertyScopeOutput,
        mElement: LEFT_CHANNEL,
    }
}

/// Read a fixed-size property value, starting from `initial`
fn get_property<T: Copy>(
    object: AudioObjectID,
    address: &AudioObjectPropertyAddress,
    property: Property,
    initial: T,
) -> Result<T> {
    let mut value = initial;
    let mut size = mem::size_of::<T>() as UInt32;

    // SAFETY: `value` is a live, writable `T` and `size` holds its exact byte
    // size, so the HAL writes at most `size_of::<T>()` bytes into it.
    let status = unsafe {
        AudioObjectGetPropertyData(
            object,
            address,
            0,
            ptr::null(),
            &mut size,
            ptr::addr_of_mut!(value).cast(),
        )
    };

    if status != NO_ERR {
        return Err(QueryError::status(property, status));
    }

    Ok(value)
}
