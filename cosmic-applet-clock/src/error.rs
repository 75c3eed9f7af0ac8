// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A display name outside the registry was looked up.
    #[error("unknown timezone display name `{0}`")]
    UnknownTimezone(String),
    /// A dropdown position past the end of the registry was selected.
    #[error("no timezone at dropdown position {0}")]
    UnknownSelection(usize),
    /// The timezone database has no entry for this identifier.
    #[error("timezone identifier `{0}` is not in the timezone database")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, Error>;
