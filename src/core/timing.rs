//! Durations shared by the board timers and the animations they pace.
//!
//! The pulse-off timer and the pulse keyframes both read `PULSE_DURATION`; the
//! removal timer and the flight animation both read `FLIGHT_DURATION`.

use std::time::Duration;

/// Length of the bookmark pulse, in seconds.
pub const PULSE_DURATION: f64 = 0.4;

/// Length of a card flight, in seconds. The card is removed when it ends.
pub const FLIGHT_DURATION: f64 = 0.6;

/// Peak scale of the bookmark pulse.
pub const PULSE_PEAK_SCALE: f32 = 1.4;

/// Flight end values.
pub const FLIGHT_END_SCALE: f32 = 0.3;
pub const FLIGHT_END_OPACITY: f32 = 0.4;
pub const FLIGHT_END_ROTATION_DEG: f32 = 10.0;

/// The flight lands this many points up and left of the bookmark box.
pub const FLIGHT_TARGET_OFFSET: f32 = 10.0;

/// Repaint cadence while anything is moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
