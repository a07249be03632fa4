// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::index::Index;

/// The pieces of a stored RPM path (`<repository>/<package>.<arch>`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Package<'a> {
    repository: &'a str,
    name: &'a str,
    arch: &'a str,
}

impl<'a> Package<'a> {
    fn new(path: &'a str) -> Self {
        let (head, name) = match path.rfind('/') {
            Some(n) => (&path[..=n], &path[n + 1..]),
            None => ("", path),
        };

        // Trailing separators are dropped unless they are all there is (`/`)
        let trimmed = head.trim_end_matches('/');
        let repository = if trimmed.is_empty() { head } else { trimmed };

        // Leading dots never start an extension (`.hidden` has none)
        let stem = name.trim_start_matches('.');
        let arch = stem.rfind('.').map(|n| &stem[n + 1..]).unwrap_or_default();

        Self {
            repository,
            name,
            arch,
        }
    }
}

/// Package URLs, with each package filed under its architecture
pub fn rpms(index: &Index) -> impl Iterator<Item = String> + '_ {
    index
        .iter()
        .filter_map(|(url, source)| Some((url, source.rpms.as_ref()?)))
        .flat_map(|(url, rpms)| {
            rpms.iter().map(move |path| {
                let pkg = Package::new(path);
                format!("{}/{}/{}/{}.rpm", url, pkg.repository, pkg.arch, pkg.name)
            })
        })
}
