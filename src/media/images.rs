// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::index::Index;

/// Image file URLs for every architecture and medium of each artifact
///
/// Artifacts without `mediums` are skipped. A missing or `latest` release
/// becomes the `\[RELEASE\]` placeholder and missing arches default to
/// `x86_64`.
pub fn images(index: &Index) -> impl Iterator<Item = String> + '_ {
    index
        .iter()
        .filter_map(|(url, source)| Some((url, source.artifacts.as_ref()?)))
        .flat_map(|(url, artifacts)| {
            artifacts
                .iter()
                .filter_map(|(name, meta)| Some((name, meta, meta.mediums.as_ref()?)))
                .flat_map(move |(name, meta, mediums)| {
                    let release = meta.release();
                    meta.arches().into_iter().flat_map(move |arch| {
                        mediums.iter().map(move |medium| {
                            format!(
                                "{}/{}/{}/{}-{}-{}.{}",
                                url, name, release, name, release, arch, medium
                            )
                        })
                    })
                })
        })
}
