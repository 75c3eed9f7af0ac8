// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Wall-clock time of day, resolved against a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl<T: Timelike> From<&T> for ClockReading {
    fn from(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

impl ClockReading {
    pub fn at<Z: TimeZone>(instant: DateTime<Z>, tz: Tz) -> Self {
        Self::from(&instant.with_timezone(&tz))
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// Hour on a 12-hour dial, where midnight and noon read as 12.
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

/// Text for the digital readout under the face.
pub fn digital_time(name: &str, reading: ClockReading, military_time: bool) -> String {
    let ClockReading {
        hour,
        minute,
        second,
    } = reading;

    if military_time {
        format!("{name}: {hour:02}:{minute:02}:{second:02}")
    } else {
        let hour = reading.hour12();
        let meridiem = if reading.is_pm() { "PM" } else { "AM" };
        format!("{name}: {hour:02}:{minute:02}:{second:02} {meridiem}")
    }
}
