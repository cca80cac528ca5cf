// ABOUTME: Everything the clock screen shows for a single tick.
// ABOUTME: A pure function of the time, the face layout, and the formatter.

use crate::angles::HandAngles;
use crate::format::Formatter;
use crate::geometry::{CenterDot, FaceLayout, HandSegment};
use crate::time::ClockTime;

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    pub digital: String,
    pub date: String,
    pub angles: HandAngles,
    pub hands: [HandSegment; 3],
    pub center_dot: CenterDot,
}

impl ClockFrame {
    pub fn render(time: &ClockTime, layout: &FaceLayout, formatter: &Formatter) -> Self {
        let angles = HandAngles::from_time(time);
        Self {
            digital: formatter.time(time),
            date: formatter.date(time),
            angles,
            hands: layout.hands(&angles),
            center_dot: layout.center_dot(),
        }
    }
}
