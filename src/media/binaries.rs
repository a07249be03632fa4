// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::index::Index;

/// Release download URLs for every project artifact
pub fn binaries(index: &Index) -> impl Iterator<Item = String> + '_ {
    index
        .iter()
        .filter_map(|(url, source)| Some((url, source.projects.as_ref()?)))
        .flat_map(|(url, projects)| {
            projects.iter().flat_map(move |(project, p)| {
                p.releases().iter().flat_map(move |(release, artifacts)| {
                    artifacts.iter().map(move |artifact| {
                        format!("{}/{}/releases/download/{}/{}", url, project, release, artifact)
                    })
                })
            })
        })
}
