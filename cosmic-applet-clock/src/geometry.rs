// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Fixed clock dimensions and the pure math behind the face and hands.
//!
//! Nothing in here touches a drawing surface; `face` turns these values into
//! canvas geometry.

use std::{fmt, str::FromStr};

use cosmic::iced::{Color, Point};

use crate::time::ClockReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a color of the form #rrggbb")]
pub struct ParseRgbError;

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseRgbError)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseRgbError);
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseRgbError);
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::from_rgb8(c.r, c.g, c.b)
    }
}

/// Linear per-channel blend from `start` to `end`.
///
/// Channels are truncated toward zero, not rounded.
pub fn interpolate(start: Rgb, end: Rgb, fraction: f64) -> Rgb {
    let blend = |s: u8, e: u8| {
        let s = f64::from(s);
        (s + (f64::from(e) - s) * fraction) as u8
    };
    Rgb::new(
        blend(start.r, end.r),
        blend(start.g, end.g),
        blend(start.b, end.b),
    )
}

pub const CANVAS_SIZE: f32 = 500.0;
pub const CENTER: Point = Point::new(250.0, 250.0);

pub const WINDOW_BACKGROUND: Rgb = Rgb::new(0x1e, 0x1e, 0x2f);
pub const TEXT_COLOR: Rgb = Rgb::new(0xec, 0xf0, 0xf1);

pub const GRADIENT_STEPS: u32 = 30;
pub const GRADIENT_OUTER_RADIUS: f32 = 220.0;
pub const GRADIENT_STEP: f32 = 7.0;
pub const GRADIENT_START: Rgb = Rgb::new(0x34, 0x98, 0xdb);
pub const GRADIENT_END: Rgb = Rgb::new(0x2c, 0x3e, 0x50);

pub const NUMERAL_RADIUS: f32 = 160.0;
pub const NUMERAL_SIZE: f32 = 18.0;

pub const TICK_INNER_RADIUS: f32 = 190.0;
pub const TICK_OUTER_RADIUS: f32 = 200.0;
pub const TICK_WIDTH: f32 = 2.0;
pub const TICK_COLOR: Rgb = Rgb::new(0xbd, 0xc3, 0xc7);

pub const CENTER_DOT_RADIUS: f32 = 5.0;
pub const CENTER_DOT_COLOR: Rgb = TEXT_COLOR;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub length: f32,
    pub width: f32,
    pub color: Rgb,
}

pub const HOUR_HAND: Hand = Hand {
    length: 80.0,
    width: 10.0,
    color: Rgb::new(0xe7, 0x4c, 0x3c),
};

pub const MINUTE_HAND: Hand = Hand {
    length: 120.0,
    width: 8.0,
    color: Rgb::new(0xf1, 0xc4, 0x0f),
};

pub const SECOND_HAND: Hand = Hand {
    length: 140.0,
    width: 4.0,
    color: Rgb::new(0x2e, 0xcc, 0x71),
};

// Angles are in degrees with 0° at three o'clock, growing clockwise.

pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    (hour % 12) as f32 * 30.0 + minute as f32 / 2.0 - 90.0
}

pub fn minute_angle(minute: u32, second: u32) -> f32 {
    minute as f32 * 6.0 + second as f32 / 10.0 - 90.0
}

pub fn second_angle(second: u32) -> f32 {
    second as f32 * 6.0 - 90.0
}

/// Point at `radius` from the center along `degrees`.
pub fn polar(radius: f32, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(CENTER.x + radius * cos, CENTER.y + radius * sin)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl From<ClockReading> for HandAngles {
    fn from(r: ClockReading) -> Self {
        Self {
            hour: hour_angle(r.hour, r.minute),
            minute: minute_angle(r.minute, r.second),
            second: second_angle(r.second),
        }
    }
}

impl HandAngles {
    /// Segments from the center to each hand tip, hour first.
    pub fn segments(&self) -> [(Hand, Point); 3] {
        [
            (HOUR_HAND, polar(HOUR_HAND.length, self.hour)),
            (MINUTE_HAND, polar(MINUTE_HAND.length, self.minute)),
            (SECOND_HAND, polar(SECOND_HAND.length, self.second)),
        ]
    }
}

/// Concentric background circles, outermost first.
pub fn gradient_rings() -> impl Iterator<Item = (f32, Rgb)> {
    (0..GRADIENT_STEPS).map(|i| {
        let radius = GRADIENT_OUTER_RADIUS - i as f32 * GRADIENT_STEP;
        let color = interpolate(
            GRADIENT_START,
            GRADIENT_END,
            f64::from(i) / f64::from(GRADIENT_STEPS),
        );
        (radius, color)
    })
}

pub fn numeral_positions() -> impl Iterator<Item = (u32, Point)> {
    (1..=12).map(|i| (i, polar(NUMERAL_RADIUS, (i * 30) as f32 - 90.0)))
}

/// Minute tick segments. Every fifth position is left to the numerals.
pub fn tick_segments() -> impl Iterator<Item = (Point, Point)> {
    (0..60u32).filter(|i| i % 5 != 0).map(|i| {
        let degrees = (i * 6) as f32 - 90.0;
        (
            polar(TICK_INNER_RADIUS, degrees),
            polar(TICK_OUTER_RADIUS, degrees),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn distance(a: Point, b: Point) -> f32 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn second_hand_for_every_second() {
        for s in 0..60 {
            let angle = second_angle(s);
            assert_eq!(angle, s as f32 * 6.0 - 90.0);

            let tip = polar(SECOND_HAND.length, angle);
            assert!((distance(CENTER, tip) - SECOND_HAND.length).abs() < EPSILON);
        }
    }

    #[test]
    fn twelve_points_up_and_three_points_right() {
        let up = polar(100.0, second_angle(0));
        assert!((up.x - CENTER.x).abs() < EPSILON);
        assert!((up.y - (CENTER.y - 100.0)).abs() < EPSILON);

        let right = polar(100.0, second_angle(15));
        assert!((right.x - (CENTER.x + 100.0)).abs() < EPSILON);
        assert!((right.y - CENTER.y).abs() < EPSILON);
    }

    #[test]
    fn hour_hand_stays_within_its_sector() {
        for hour in 0..24 {
            let start = hour_angle(hour, 0);
            let end = hour_angle(hour, 59);
            assert!(end > start);
            assert!(end - start < 30.0);
            assert_eq!(start, (hour % 12) as f32 * 30.0 - 90.0);
        }
    }

    #[test]
    fn minute_hand_creeps_with_seconds() {
        assert_eq!(minute_angle(30, 0), 90.0);
        assert!((minute_angle(30, 30) - 93.0).abs() < EPSILON);
    }

    #[test]
    fn interpolate_endpoints_and_identity() {
        let a = GRADIENT_START;
        let b = GRADIENT_END;
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
        for f in [0.0, 0.1, 0.33, 0.5, 0.99, 1.0] {
            assert_eq!(interpolate(a, a, f), a);
        }
    }

    #[test]
    fn interpolate_truncates() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(0xff, 0xff, 0xff);
        assert_eq!(interpolate(black, white, 0.5), Rgb::new(0x7f, 0x7f, 0x7f));
        assert_eq!(
            interpolate(GRADIENT_START, GRADIENT_END, 0.5).to_string(),
            "#306b95"
        );
    }

    #[test]
    fn hex_round_trip() {
        let c: Rgb = "#3498db".parse().unwrap();
        assert_eq!(c, GRADIENT_START);
        assert_eq!(c.to_string(), "#3498db");
        assert!("3498db".parse::<Rgb>().is_err());
        assert!("#3498d".parse::<Rgb>().is_err());
        assert!("#zz98db".parse::<Rgb>().is_err());
        assert_eq!(
            "3498db".parse::<Rgb>().unwrap_err().to_string(),
            "expected a color of the form #rrggbb"
        );
    }

    #[test]
    fn gradient_shrinks_toward_end_color() {
        let rings: Vec<_> = gradient_rings().collect();
        assert_eq!(rings.len(), 30);
        assert_eq!(rings[0], (220.0, GRADIENT_START));
        assert_eq!(rings[29].0, 220.0 - 29.0 * 7.0);
        assert!(rings.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn suppressed_ticks_line_up_with_numerals() {
        assert_eq!(tick_segments().count(), 48);

        // A numeral sits on every multiple of 30°, which is where ticks are skipped.
        for (n, pos) in numeral_positions() {
            let expected = polar(NUMERAL_RADIUS, second_angle(n * 5 % 60));
            assert!(distance(pos, expected) < EPSILON, "numeral {n}");
            for (inner, _) in tick_segments() {
                let scaled = Point::new(
                    CENTER.x + (pos.x - CENTER.x) * TICK_INNER_RADIUS / NUMERAL_RADIUS,
                    CENTER.y + (pos.y - CENTER.y) * TICK_INNER_RADIUS / NUMERAL_RADIUS,
                );
                assert!(distance(inner, scaled) > 1.0);
            }
        }
    }

    #[test]
    fn face_geometry_is_deterministic() {
        assert!(gradient_rings().eq(gradient_rings()));
        assert!(numeral_positions().eq(numeral_positions()));
        assert!(tick_segments().eq(tick_segments()));
    }

    #[test]
    fn hand_segments_have_hand_lengths() {
        let angles = HandAngles::from(ClockReading {
            hour: 13,
            minute: 5,
            second: 9,
        });
        assert!((angles.hour - (30.0 + 2.5 - 90.0)).abs() < EPSILON);
        for (hand, tip) in angles.segments() {
            assert!((distance(CENTER, tip) - hand.length).abs() < EPSILON);
        }
    }
}
