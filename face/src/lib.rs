// ABOUTME: Clock face model for the MobileOS clock app.
// ABOUTME: Turns wall-clock time into hand angles, line geometry, and display strings.

pub mod angles;
pub mod config;
pub mod format;
pub mod frame;
pub mod geometry;
pub mod state;
pub mod time;

pub use angles::HandAngles;
pub use config::ClockConfig;
pub use format::Formatter;
pub use frame::ClockFrame;
pub use geometry::{CenterDot, FaceLayout, Hand, HandSegment, HandStyle, Point, Rgb};
pub use state::ClockState;
pub use time::{ClockTime, FixedClock, LocalClock, TimeSource};
