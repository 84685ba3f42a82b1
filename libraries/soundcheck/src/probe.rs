// soundcheck/src/probe.rs
//
// Audio activity probe: default device -> running -> volume, with early exits.
// Every failure collapses into a non-playing verdict.

use crate::platform::SystemAudio;
use crate::service::{read_volume, AudioService};
use crate::types::{Verdict, VolumeReading};

/// Is the system's default output device currently producing audible sound?
///
/// Queries the platform audio service once. Returns `false` whenever any
/// query fails.
pub fn is_audio_playing() -> bool {
    is_playing_with(&SystemAudio)
}

/// Same as [`is_audio_playing`], against an arbitrary audio service
pub fn is_playing_with<S: AudioService + ?Sized>(service: &S) -> bool {
    inspect(service).is_playing()
}

/// Run the probe and report why it decided what it did
pub fn inspect<S: AudioService + ?Sized>(service: &S) -> Verdict {
    let verdict = run(service);
    tracing::trace!(%verdict, playing = verdict.is_playing(), "Audio probe finished");
    verdict
}

fn run<S: AudioService + ?Sized>(service: &S) -> Verdict {
    let device = match service.default_output_device() {
        Ok(device) => device,
        Err(error) => {
            tracing::debug!(%error, "Default output device unavailable");
            return Verdict::NoDevice { error };
        }
    };

    match service.is_running(device) {
        Ok(true) => {}
        Ok(false) => return Verdict::Idle { device },
        Err(error) => {
            tracing::debug!(%device, %error, "Running state unavailable");
            return Verdict::RunningUnknown { device, error };
        }
    }

    // Only the left channel is consulted; a failed read does not veto playback.
    let volume = read_volume(service, device);
    if volume.is_muted() {
        return Verdict::Muted { device };
    }
    if let VolumeReading::Failed { error } = &volume {
        tracing::debug!(%device, %error, "Volume unreadable, trusting running state");
    }

    Verdict::Playing { device, volume }
}
