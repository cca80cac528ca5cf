// ABOUTME: Line geometry for the analog clock hands.
// ABOUTME: Maps hand angles and a surface size to segments radiating from the face center.

use crate::angles::{to_screen_radians, HandAngles};

/// Share of the half-size used as the face radius; the rest is left for the dial art.
const RADIUS_RATIO: f32 = 0.8;
const CENTER_DOT_RADIUS: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const RED: Rgb = Rgb { r: 0xff, g: 0, b: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    pub fn style(self) -> HandStyle {
        match self {
            Hand::Hour => HandStyle {
                length_ratio: 0.5,
                stroke_width: 12.0,
                color: Rgb::BLACK,
            },
            Hand::Minute => HandStyle {
                length_ratio: 0.7,
                stroke_width: 8.0,
                color: Rgb::BLACK,
            },
            Hand::Second => HandStyle {
                length_ratio: 0.8,
                stroke_width: 4.0,
                color: Rgb::RED,
            },
        }
    }

    pub fn angle(self, angles: &HandAngles) -> f32 {
        match self {
            Hand::Hour => angles.hour,
            Hand::Minute => angles.minute,
            Hand::Second => angles.second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    /// Hand length as a fraction of the face radius.
    pub length_ratio: f32,
    pub stroke_width: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub hand: Hand,
    pub start: Point,
    pub end: Point,
    pub stroke_width: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterDot {
    pub center: Point,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    width: f32,
    height: f32,
}

impl FaceLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.width.min(self.height) / 2.0 * RADIUS_RATIO
    }

    pub fn hand(&self, hand: Hand, angle_degrees: f32) -> HandSegment {
        let style = hand.style();
        let center = self.center();
        let length = self.radius() * style.length_ratio;
        let theta = to_screen_radians(angle_degrees);
        HandSegment {
            hand,
            start: center,
            end: Point {
                x: center.x + length * theta.cos(),
                y: center.y + length * theta.sin(),
            },
            stroke_width: style.stroke_width,
            color: style.color,
        }
    }

    /// Segments in draw order: hour, minute, second.
    pub fn hands(&self, angles: &HandAngles) -> [HandSegment; 3] {
        Hand::ALL.map(|hand| self.hand(hand, hand.angle(angles)))
    }

    pub fn center_dot(&self) -> CenterDot {
        CenterDot {
            center: self.center(),
            radius: CENTER_DOT_RADIUS,
            color: Rgb::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn radius_uses_shorter_side() {
        let layout = FaceLayout::new(400.0, 300.0);
        assert_eq!(layout.center(), Point { x: 200.0, y: 150.0 });
        assert!((layout.radius() - 120.0).abs() < EPS);
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let layout = FaceLayout::new(-10.0, 50.0);
        assert_eq!(layout.radius(), 0.0);
        assert_eq!(layout.center(), Point { x: 0.0, y: 25.0 });
    }

    #[test]
    fn cardinal_directions() {
        // radius 100, second hand length 80
        let layout = FaceLayout::square(250.0);
        let c = layout.center();
        let cases = [
            (0.0, Point { x: c.x, y: c.y - 80.0 }),
            (90.0, Point { x: c.x + 80.0, y: c.y }),
            (180.0, Point { x: c.x, y: c.y + 80.0 }),
            (270.0, Point { x: c.x - 80.0, y: c.y }),
        ];
        for (angle, expected) in cases {
            let seg = layout.hand(Hand::Second, angle);
            assert_eq!(seg.start, c);
            assert!(close(seg.end, expected), "{angle}: {:?}", seg.end);
        }
    }

    #[test]
    fn hand_lengths_follow_ratios() {
        let layout = FaceLayout::square(250.0);
        let angles = HandAngles {
            hour: 30.0,
            minute: 123.0,
            second: 300.0,
        };
        let [hour, minute, second] = layout.hands(&angles);
        let len = |s: &HandSegment| (s.end.x - s.start.x).hypot(s.end.y - s.start.y);
        assert!((len(&hour) - 50.0).abs() < EPS);
        assert!((len(&minute) - 70.0).abs() < EPS);
        assert!((len(&second) - 80.0).abs() < EPS);
    }

    #[test]
    fn hands_are_styled_and_ordered() {
        let layout = FaceLayout::square(300.0);
        let angles = HandAngles {
            hour: 0.0,
            minute: 0.0,
            second: 0.0,
        };
        let segs = layout.hands(&angles);
        assert_eq!(segs.map(|s| s.hand), Hand::ALL);
        assert_eq!(segs.map(|s| s.stroke_width), [12.0, 8.0, 4.0]);
        assert_eq!(segs[0].color, Rgb::BLACK);
        assert_eq!(segs[1].color, Rgb::BLACK);
        assert_eq!(segs[2].color, Rgb::RED);
    }

    #[test]
    fn center_dot_sits_at_center() {
        let layout = FaceLayout::square(300.0);
        let dot = layout.center_dot();
        assert_eq!(dot.center, Point { x: 150.0, y: 150.0 });
        assert_eq!(dot.radius, 16.0);
        assert_eq!(dot.color, Rgb::BLACK);
    }
}
