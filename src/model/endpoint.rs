// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use super::method::HttpMethod;

/// Response metadata for one status code, with `$ref`s already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    description: String,
    headers: BTreeMap<String, String>,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.headers.insert(name.into(), description.into());
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Header name to header description, iterated by name.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

/// One HTTP method on one path. Identity is `(path, method)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    method: HttpMethod,
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<SmolStr>,
    responses: BTreeMap<String, Response>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            summary: None,
            description: None,
            tags: Vec::new(),
            responses: BTreeMap::new(),
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary.filter(|summary| !summary.trim().is_empty());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the tag names, dropping repeats while keeping declaration order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn with_response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &[SmolStr] {
        &self.tags
    }

    /// Status code to response, iterated by status-code string.
    pub fn responses(&self) -> &BTreeMap<String, Response> {
        &self.responses
    }

    /// Outline label, e.g. `GET@/users`.
    pub fn title(&self) -> String {
        format!("{}@{}", self.method, self.path)
    }

    /// Secondary ordering key inside a tag bucket.
    pub fn sort_key(&self) -> (&str, HttpMethod) {
        (self.path.as_str(), self.method)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
