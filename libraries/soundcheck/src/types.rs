// soundcheck/src/types.rs
//
// Values produced by a single probe call. Nothing here outlives the call.

use std::fmt;

use serde::Serialize;

use crate::error::QueryError;

/// Opaque identifier of an audio device, as assigned by the platform
///
/// Never interpreted or dereferenced; only handed back to the service that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    /// Wrap a raw platform identifier
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw platform identifier
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of reading a device's primary-channel volume
///
/// Keeps "the device has no volume control" apart from "the read failed",
/// even though both let a running device count as playing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeReading {
    /// Device does not expose a scalar volume property
    Unsupported,

    /// Scalar volume, 0.0 (silent) to 1.0 (full)
    Level {
        /// Volume reported by the driver
        value: f32,
    },

    /// Property exists but reading it failed
    Failed {
        /// Underlying query error
        error: QueryError,
    },
}

impl VolumeReading {
    /// Is this an exact zero volume?
    pub fn is_muted(&self) -> bool {
        matches!(self, Self::Level { value } if *value == 0.0)
    }
}

/// Why a probe decided the device is or is not playing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Verdict {
    /// The default output device could not be resolved
    NoDevice {
        /// Error from the device query
        error: QueryError,
    },

    /// The device was resolved but its running state could not be read
    RunningUnknown {
        /// Default output device
        device: DeviceId,
        /// Error from the running-state query
        error: QueryError,
    },

    /// The device is not streaming audio
    Idle {
        /// Default output device
        device: DeviceId,
    },

    /// The device is streaming but its primary channel volume is exactly zero
    Muted {
        /// Default output device
        device: DeviceId,
    },

    /// The device is streaming and not muted
    Playing {
        /// Default output device
        device: DeviceId,
        /// Volume reading that did not veto playback
        volume: VolumeReading,
    },
}

impl Verdict {
    /// Is audio considered audible?
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Device the verdict is about, if one was resolved
    pub fn device(&self) -> Option<DeviceId> {
        match self {
            Self::NoDevice { .. } => None,
            Self::RunningUnknown { device, .. }
            | Self::Idle { device }
            | Self::Muted { device }
            | Self::Playing { device, .. } => Some(*device),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDevice { error } => write!(f, "no default output device ({error})"),
            Self::RunningUnknown { device, error } => {
                write!(f, "device {device} running state unknown ({error})")
            }
            Self::Idle { device } => write!(f, "device {device} is not running"),
            Self::Muted { device } => write!(f, "device {device} is running but muted"),
            Self::Playing { device, volume } => match volume {
                VolumeReading::Level { value } => {
                    write!(f, "device {device} is running at volume {value:.2}")
                }
                VolumeReading::Unsupported => {
                    write!(f, "device {device} is running (no volume control)")
                }
                VolumeReading::Failed { error } => {
                    write!(f, "device {device} is running (volume unreadable: {error})")
                }
            },
        }
    }
}
