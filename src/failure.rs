// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use std::path::PathBuf;

/// A terminal condition reported to the user as a single line
///
/// These end the process with an exit status of 1. Anything else that goes
/// wrong (such as a malformed index) is an ordinary error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    MissingMedium,
    NotFound(PathBuf),
    UnknownMedium(String),
}

impl Failure {
    /// The line shown to the user, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Failure::MissingMedium => None,
            _ => Some(self.to_string()),
        }
    }
}

impl std::error::Error for Failure {}
impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::MissingMedium => f.write_str("no medium given"),
            Failure::NotFound(path) => write!(f, "Failed to open index file: {}", path.display()),
            Failure::UnknownMedium(medium) => write!(f, "No case for {}.", medium),
        }
    }
}
