//! Default audio output activity probe
//!
//! This crate answers one question: is the system's default audio output
//! device currently producing audible sound?
//!
//! It asks the platform audio service for the default output device, whether
//! that device is running somewhere, and the scalar volume of its primary
//! channel. Any query failure is reported as "not playing".
//!
//! # Example
//!
//! ```no_run
//! if soundcheck::is_audio_playing() {
//!     println!("something is playing");
//! }
//! ```
//!
//! The probe logic is written against the [`AudioService`] trait, so it can be
//! driven by any implementation:
//!
//! ```
//! use soundcheck::{inspect, AudioService, DeviceId, Property, QueryError, Verdict};
//!
//! struct Silent;
//!
//! impl AudioService for Silent {
//!     fn default_output_device(&self) -> Result<DeviceId, QueryError> {
//!         Ok(DeviceId::new(1))
//!     }
//!     fn is_running(&self, _device: DeviceId) -> Result<bool, QueryError> {
//!         Ok(false)
//!     }
//!     fn has_volume_property(&self, _device: DeviceId) -> bool {
//!         false
//!     }
//!     fn volume(&self, _device: DeviceId) -> Result<f32, QueryError> {
//!         Err(QueryError::status(Property::VolumeScalar, -1))
//!     }
//! }
//!
//! assert_eq!(inspect(&Silent), Verdict::Idle { device: DeviceId::new(1) });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod ffi;
pub mod platform;
pub mod probe;
pub mod service;
pub mod types;

pub use error::{Property, QueryError, Result};
pub use platform::SystemAudio;
pub use probe::{inspect, is_audio_playing, is_playing_with};
pub use service::{read_volume, AudioService};
pub use types::{DeviceId, Verdict, VolumeReading};
