// ABOUTME: Pushes a rendered clock frame into the Slint window.
// ABOUTME: Converts face geometry into the UI's HandLine structs and colors.

use std::rc::Rc;

use mos_clockface::{ClockFrame, HandSegment, Rgb};
use slint::{Color, VecModel};

use crate::{ClockWindow, HandLine};

pub fn apply(window: &ClockWindow, frame: &ClockFrame) {
    window.set_time(frame.digital.as_str().into());
    window.set_date(frame.date.as_str().into());

    let model = Rc::new(VecModel::from(hand_lines(frame)));
    window.set_hands(model.into());

    let dot = frame.center_dot;
    window.set_dot_x(dot.center.x);
    window.set_dot_y(dot.center.y);
    window.set_dot_radius(dot.radius);
    window.set_dot_color(to_color(dot.color));
}

pub fn hand_lines(frame: &ClockFrame) -> Vec<HandLine> {
    frame.hands.iter().map(hand_line).collect()
}

fn hand_line(segment: &HandSegment) -> HandLine {
    HandLine {
        x1: segment.start.x,
        y1: segment.start.y,
        x2: segment.end.x,
        y2: segment.end.y,
        thickness: segment.stroke_width,
        color: to_color(segment.color),
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb_u8(rgb.r, rgb.g, rgb.b)
}
