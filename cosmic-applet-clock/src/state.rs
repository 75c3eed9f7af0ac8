// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, Utc};

use crate::{
    error::{Error, Result},
    geometry::HandAngles,
    registry::{self, Registry},
    time::{ClockReading, digital_time},
};

/// Everything a tick reads or writes, kept apart from the window so it can be
/// driven without a display.
#[derive(Debug, Clone)]
pub struct ClockState {
    registry: Registry,
    /// Display name of the selected registry entry.
    selected: &'static str,
    military_time: bool,
    /// Last successful reading and the name of the zone it was taken in.
    shown: Option<(&'static str, ClockReading)>,
    digital: String,
    error: Option<Error>,
    ticking: bool,
}

impl ClockState {
    pub fn new(registry: Registry) -> Self {
        let selected = registry
            .get(registry.default_index())
            .map_or("UTC", |e| e.name);

        Self {
            registry,
            selected,
            military_time: false,
            shown: None,
            digital: String::new(),
            error: None,
            ticking: true,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selected_name(&self) -> &'static str {
        self.selected
    }

    pub fn selected_index(&self) -> usize {
        self.registry
            .position(self.selected)
            .unwrap_or_else(|_| self.registry.default_index())
    }

    /// Selects the entry at a dropdown position. An unknown position leaves the
    /// current selection in place.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let entry = self
            .registry
            .get(index)
            .ok_or(Error::UnknownSelection(index))?;
        self.selected = entry.name;
        Ok(())
    }

    pub fn set_military_time(&mut self, military_time: bool) {
        self.military_time = military_time;
        if let Some((name, reading)) = self.shown {
            self.digital = digital_time(name, reading, military_time);
        }
    }

    pub fn digital(&self) -> &str {
        &self.digital
    }

    /// The error raised by the most recent tick, if it failed.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Stops all further ticks. Called when the window is torn down.
    pub fn stop(&mut self) {
        self.ticking = false;
    }

    /// Resolves the selected zone at `instant` and returns the new hand angles,
    /// or `None` once the clock has been stopped.
    ///
    /// On failure the previous reading and readout are left untouched.
    pub fn tick(&mut self, instant: DateTime<Utc>) -> Result<Option<HandAngles>> {
        if !self.ticking {
            return Ok(None);
        }

        let tz = match self
            .registry
            .lookup(self.selected)
            .and_then(registry::resolve)
        {
            Ok(tz) => tz,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        let reading = ClockReading::at(instant, tz);
        self.shown = Some((self.selected, reading));
        self.digital = digital_time(self.selected, reading, self.military_time);
        self.error = None;

        Ok(Some(HandAngles::from(reading)))
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}
