// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

#[derive(
    Debug, Clone, Default, CosmicConfigEntry, PartialEq, Eq, serde::Deserialize, serde::Serialize,
)]
#[version = 1]
pub struct ClockAppletConfig {
    /// Show the digital readout on a 24-hour clock without AM/PM.
    #[serde(default)]
    pub military_time: bool,
}
