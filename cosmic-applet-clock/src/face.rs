// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{
    Color, Font, Pixels, Rectangle,
    alignment::{Horizontal, Vertical},
    font::Weight,
    mouse,
    widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text},
};

use crate::geometry::{
    CENTER, CENTER_DOT_COLOR, CENTER_DOT_RADIUS, HandAngles, NUMERAL_SIZE, TEXT_COLOR, TICK_COLOR,
    TICK_WIDTH, gradient_rings, numeral_positions, tick_segments,
};

/// Canvas program for the analog clock.
///
/// The face and the hands are cached separately: the face is built once and
/// only the hands layer is invalidated on each tick.
#[derive(Default)]
pub struct ClockFace {
    face: Cache,
    hands: Cache,
    angles: Option<HandAngles>,
}

impl ClockFace {
    pub fn set_hands(&mut self, angles: HandAngles) {
        self.angles = Some(angles);
        self.hands.clear();
    }
}

impl<Message> canvas::Program<Message, cosmic::Theme> for ClockFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &cosmic::Renderer,
        _theme: &cosmic::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let face = self.face.draw(renderer, bounds.size(), draw_face);
        let hands = self.hands.draw(renderer, bounds.size(), |frame| {
            if let Some(angles) = self.angles.as_ref() {
                draw_hands(frame, angles);
            }
        });

        vec![face, hands]
    }
}

pub fn draw_face(frame: &mut Frame) {
    for (radius, color) in gradient_rings() {
        frame.fill(&Path::circle(CENTER, radius), Color::from(color));
    }

    for (numeral, position) in numeral_positions() {
        frame.fill_text(Text {
            content: numeral.to_string(),
            position,
            color: TEXT_COLOR.into(),
            size: Pixels(NUMERAL_SIZE),
            font: Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });
    }

    for (from, to) in tick_segments() {
        frame.stroke(
            &Path::line(from, to),
            Stroke::default()
                .with_width(TICK_WIDTH)
                .with_color(TICK_COLOR.into()),
        );
    }
}

pub fn draw_hands(frame: &mut Frame, angles: &HandAngles) {
    for (hand, tip) in angles.segments() {
        frame.stroke(
            &Path::line(CENTER, tip),
            Stroke::default()
                .with_width(hand.width)
                .with_color(hand.color.into()),
        );
    }

    frame.fill(
        &Path::circle(CENTER, CENTER_DOT_RADIUS),
        Color::from(CENTER_DOT_COLOR),
    );
}
