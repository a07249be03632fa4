// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::index::Index;

/// Container image references, one per tag
pub fn docker(index: &Index) -> impl Iterator<Item = String> + '_ {
    index
        .iter()
        .filter_map(|(url, source)| Some((url, source.images.as_ref()?)))
        .flat_map(|(url, images)| {
            images
                .iter()
                .flat_map(move |(name, tags)| tags.iter().map(move |tag| format!("{}/{}:{}", url, name, tag)))
        })
}
