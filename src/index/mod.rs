// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

//! The per-medium release index and its loader

mod entries;
mod scalar;

pub use self::entries::Entries;
pub use self::scalar::Scalar;

use crate::failure::Failure;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// The releases of a single project, keyed by release tag
pub type Releases = Entries<Vec<Scalar>>;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nested {
    releases: Releases,
}

/// A project published as downloadable binaries
///
/// Older indexes wrap the release map in a `releases` key; newer ones put
/// the release tags directly under the project name.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Project {
    Nested(Nested),
    Flat(Releases),
}

impl Project {
    pub fn releases(&self) -> &Releases {
        match self {
            Self::Nested(nested) => &nested.releases,
            Self::Flat(releases) => releases,
        }
    }
}

/// Describes a disk image (or similar) artifact
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Artifact {
    pub mediums: Option<Vec<Scalar>>,
    pub release: Option<Scalar>,
    pub arches: Option<Vec<Scalar>>,
}

impl Artifact {
    const LATEST: &'static str = "latest";
    const DEFAULT_ARCH: &'static str = "x86_64";

    /// The token substituted for the release by downstream templating
    pub const PLACEHOLDER: &'static str = r"\[RELEASE\]";

    /// The release, with `latest` (explicit or defaulted) as the placeholder
    pub fn release(&self) -> &str {
        match self.release.as_deref() {
            None | Some(Self::LATEST) => Self::PLACEHOLDER,
            Some(release) => release,
        }
    }

    pub fn arches(&self) -> Vec<&str> {
        match &self.arches {
            Some(arches) => arches.iter().map(|a| a.as_str()).collect(),
            None => vec![Self::DEFAULT_ARCH],
        }
    }
}

/// Everything published under a single base URL
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Source {
    pub projects: Option<Entries<Project>>,
    pub images: Option<Entries<Vec<Scalar>>>,
    pub artifacts: Option<Entries<Artifact>>,
    pub rpms: Option<Vec<Scalar>>,
}

/// A parsed `index.yml`, keyed by base URL in document order
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Index(Entries<Source>);

impl Index {
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("unable to open {:?}: {}", path, e);
                return Err(Failure::NotFound(path.into()).into());
            }
        };

        serde_yaml_ng::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed index file: {}", path.display()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Source)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
