//! C ABI
//!
//! Exposes the probe to foreign callers loading the `cdylib`:
//!
//! ```c
//! int is_audio_playing(void); /* 1 = playing, 0 = not playing */
//! ```

#![allow(unsafe_code)]

use std::os::raw::c_int;
use std::panic;

/// C entry point for [`crate::is_audio_playing`]
///
/// Returns `1` when the default output device is audibly playing and `0`
/// otherwise. A panic inside the probe is reported as `0`.
#[no_mangle]
pub extern "C" fn is_audio_playing() -> c_int {
    let playing = panic::catch_unwind(crate::probe::is_audio_playing).unwrap_or(false);
    c_int::from(playing)
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn test_c_entry_point_returns_zero_without_audio_service() {
        assert_eq!(is_audio_playing(), 0);
    }
}
