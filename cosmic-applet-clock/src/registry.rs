// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use chrono_tz::Tz;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub name: &'static str,
    pub identifier: &'static str,
}

const fn entry(name: &'static str, identifier: &'static str) -> TimezoneEntry {
    TimezoneEntry { name, identifier }
}

static ENTRIES: [TimezoneEntry; 9] = [
    entry("New York", "America/New_York"),
    entry("London", "Europe/London"),
    entry("Tokyo", "Asia/Tokyo"),
    entry("Sydney", "Australia/Sydney"),
    entry("Mumbai", "Asia/Kolkata"),
    entry("Pakistan", "Asia/Karachi"),
    entry("UAE", "Asia/Dubai"),
    entry("Saudi Arabia", "Asia/Riyadh"),
    entry("UTC", "UTC"),
];

const DEFAULT_NAME: &str = "UTC";

/// The fixed set of selectable timezones, in dropdown order.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    entries: &'static [TimezoneEntry],
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&ENTRIES)
    }
}

impl Registry {
    pub(crate) const fn new(entries: &'static [TimezoneEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [TimezoneEntry] {
        self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries().iter().map(|e| e.name).collect()
    }

    pub fn get(&self, index: usize) -> Option<&'static TimezoneEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| Error::UnknownTimezone(name.to_owned()))
    }

    pub fn lookup(&self, name: &str) -> Result<&'static str> {
        self.position(name).map(|i| self.entries[i].identifier)
    }

    pub fn default_index(&self) -> usize {
        // The default entry is part of the static table above.
        self.position(DEFAULT_NAME).unwrap_or(0)
    }
}

/// Resolve an identifier against the compiled timezone database.
pub fn resolve(identifier: &str) -> Result<Tz> {
    identifier
        .parse::<Tz>()
        .map_err(|_| Error::InvalidTimezone(identifier.to_owned()))
}
