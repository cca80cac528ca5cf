// ABOUTME: Hand angle computation for the analog clock face.
// ABOUTME: Angles are degrees clockwise from 12 o'clock.

use crate::time::ClockTime;

const DEGREES_PER_HOUR: f32 = 360.0 / 12.0;
const DEGREES_PER_MINUTE: f32 = 360.0 / 60.0;
const DEGREES_PER_SECOND: f32 = 360.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// The hour hand sweeps with the minutes instead of jumping on the hour.
    pub fn from_time(time: &ClockTime) -> Self {
        let minute = time.minute() as f32;
        Self {
            hour: time.hour12() as f32 * DEGREES_PER_HOUR + minute * DEGREES_PER_HOUR / 60.0,
            minute: minute * DEGREES_PER_MINUTE,
            second: time.second() as f32 * DEGREES_PER_SECOND,
        }
    }
}

/// Converts a clockwise-from-top angle into radians in the drawing frame,
/// where 0 points right and y grows downward.
pub fn to_screen_radians(degrees: f32) -> f32 {
    (degrees - 90.0).to_radians()
}
