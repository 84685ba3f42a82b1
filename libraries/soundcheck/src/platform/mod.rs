//! System audio service
//!
//! [`SystemAudio`] is the [`AudioService`](crate::AudioService) backed by the
//! host operating system:
//!
//! - **macOS**: Core Audio HAL property queries
//! - **other targets**: no audio service; every query fails, so the probe
//!   reports "not playing"

#[cfg(target_os = "macos")]
mod coreaudio;

#[cfg(not(target_os = "macos"))]
mod unsupported;

/// The host platform's audio service
///
/// Zero-sized and stateless. Each query goes straight to the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemAudio;

impl SystemAudio {
    /// Get human-readable name of the backing audio service
    pub fn name(&self) -> &'static str {
        if cfg!(target_os = "macos") {
            "CoreAudio"
        } else {
            "Unsupported"
        }
    }

    /// Whether this target has a platform audio service to query
    pub fn is_supported(&self) -> bool {
        cfg!(target_os = "macos")
    }
}
