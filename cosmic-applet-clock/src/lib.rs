// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

mod config;
mod error;
mod face;
mod geometry;
mod localize;
mod registry;
mod state;
mod time;
mod window;

use window::Window;

pub fn run() -> cosmic::iced::Result {
    localize::localize();

    cosmic::app::run::<Window>(window::settings(), ())
}
