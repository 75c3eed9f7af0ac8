// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

pub use cosmic_applets_config::clock::ClockAppletConfig;

pub const APP_ID: &str = "com.system76.CosmicAppletClock";
