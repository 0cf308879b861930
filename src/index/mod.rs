// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tag → endpoints grouping.
//!
//! The index is built once from a loaded document. Endpoints are shared (`Arc`) between
//! every bucket they belong to, and both tag order and bucket order are deterministic
//! regardless of how the source document was laid out.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{Endpoint, SpecDocument, Tag};
use crate::store::{LoadError, SpecFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointIndex {
    buckets: BTreeMap<Tag, Vec<Arc<Endpoint>>>,
    endpoint_count: usize,
}

impl EndpointIndex {
    /// Groups the document's endpoints by tag.
    ///
    /// The `Untagged` bucket always exists. Inside a bucket endpoints are ordered by
    /// `(path, method rank)`.
    pub fn build(document: &SpecDocument) -> Self {
        let mut buckets = BTreeMap::<Tag, Vec<Arc<Endpoint>>>::new();
        buckets.insert(Tag::Untagged, Vec::new());

        for endpoint in document.endpoints() {
            let endpoint = Arc::new(endpoint.clone());
            if endpoint.tags().is_empty() {
                buckets.entry(Tag::Untagged).or_default().push(endpoint);
                continue;
            }
            for tag in endpoint.tags() {
                buckets.entry(Tag::Named(tag.clone())).or_default().push(endpoint.clone());
            }
        }

        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        }

        Self {
            buckets,
            endpoint_count: document.endpoints().len(),
        }
    }

    /// Loads `file` and builds its index.
    pub fn load(file: &SpecFile) -> Result<(SpecDocument, Self), LoadError> {
        let document = file.load()?;
        let index = Self::build(&document);
        Ok((document, index))
    }

    /// Tags in ascending order; `Untagged` comes first.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.buckets.keys()
    }

    pub fn bucket(&self, tag: &Tag) -> &[Arc<Endpoint>] {
        self.buckets.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &[Arc<Endpoint>])> + '_ {
        self.buckets.iter().map(|(tag, endpoints)| (tag, endpoints.as_slice()))
    }

    pub fn tag_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct endpoints, independent of how many buckets list them.
    pub fn endpoint_count(&self) -> usize {
        self.endpoint_count
    }
}
