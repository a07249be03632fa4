// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

//! Expansion of an index into artifact URLs, one rule per medium

mod binaries;
mod docker;
mod images;
mod rpms;

pub use self::binaries::binaries;
pub use self::docker::docker;
pub use self::images::images;
pub use self::rpms::rpms;

use crate::failure::Failure;
use crate::index::Index;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The kind of artifact an index describes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Medium {
    Binaries,
    Docker,
    Images,

    /// An RPM repository set, named by the part after `rpm/`
    Rpm(String),
}

const INDEX: &str = "index.yml";

/// Locates the index for a medium identifier under the install root
///
/// The identifier is used verbatim, so `rpm/el8` names a nested directory.
/// It need not be a known medium.
pub fn locate(root: &Path, identifier: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(identifier.split('/'));
    path.push(INDEX);
    path
}

impl Medium {
    const RPM_PREFIX: &'static str = "rpm/";

    pub fn expand<'a>(&self, index: &'a Index) -> Box<dyn Iterator<Item = String> + 'a> {
        match self {
            Self::Binaries => Box::new(binaries(index)),
            Self::Docker => Box::new(docker(index)),
            Self::Images => Box::new(images(index)),
            Self::Rpm(..) => Box::new(rpms(index)),
        }
    }
}

impl FromStr for Medium {
    type Err = Failure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "binaries" => Self::Binaries,
            "docker" => Self::Docker,
            "images" => Self::Images,
            _ => match s.strip_prefix(Self::RPM_PREFIX) {
                Some(name) => Self::Rpm(name.into()),
                None => return Err(Failure::UnknownMedium(s.into())),
            },
        })
    }
}

impl Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binaries => f.write_str("binaries"),
            Self::Docker => f.write_str("docker"),
            Self::Images => f.write_str("images"),
            Self::Rpm(name) => write!(f, "{}{}", Self::RPM_PREFIX, name),
        }
    }
}
