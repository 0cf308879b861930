// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use smol_str::SmolStr;

use crate::model::{Endpoint, HttpMethod, Response, SpecDocument};

pub const DEFAULT_SPEC_FILENAME: &str = "openapi.json";

const COMPONENT_RESPONSES_PREFIX: &str = "#/components/responses/";
const COMPONENT_HEADERS_PREFIX: &str = "#/components/headers/";
const MAX_REF_DEPTH: usize = 16;
const EXTENSION_PREFIX: &str = "x-";

/// An OpenAPI JSON document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFile {
    path: PathBuf,
}

impl SpecFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, parses, and resolves the document.
    pub fn load(&self) -> Result<SpecDocument, LoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_document(&raw).map_err(|err| err.at(&self.path))
    }
}

/// Parses an in-memory OpenAPI JSON document.
pub fn parse_document(raw: &str) -> Result<SpecDocument, DocumentError> {
    let wire: WireDocument = serde_json::from_str(raw).map_err(DocumentError::Json)?;
    wire.into_document()
}

#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    UnresolvedRef {
        path: PathBuf,
        reference: String,
    },
    UnsupportedRef {
        path: PathBuf,
        reference: String,
    },
    CyclicRef {
        path: PathBuf,
        reference: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {path:?}: {source}"),
            Self::Json { path, source } => {
                write!(f, "{path:?} is not a valid OpenAPI JSON document: {source}")
            }
            Self::UnresolvedRef { path, reference } => {
                write!(f, "unresolved reference {reference:?} in {path:?}")
            }
            Self::UnsupportedRef { path, reference } => {
                write!(f, "unsupported reference {reference:?} in {path:?}")
            }
            Self::CyclicRef { path, reference } => {
                write!(f, "reference cycle through {reference:?} in {path:?}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::UnresolvedRef { .. } => None,
            Self::UnsupportedRef { .. } => None,
            Self::CyclicRef { .. } => None,
        }
    }
}

/// Parse/resolve failure of a document that is not tied to a file yet.
#[derive(Debug)]
pub enum DocumentError {
    Json(serde_json::Error),
    UnresolvedRef(String),
    UnsupportedRef(String),
    CyclicRef(String),
}

impl DocumentError {
    fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            Self::Json(source) => LoadError::Json { path, source },
            Self::UnresolvedRef(reference) => LoadError::UnresolvedRef { path, reference },
            Self::UnsupportedRef(reference) => LoadError::UnsupportedRef { path, reference },
            Self::CyclicRef(reference) => LoadError::CyclicRef { path, reference },
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "invalid OpenAPI JSON: {source}"),
            Self::UnresolvedRef(reference) => write!(f, "unresolved reference {reference:?}"),
            Self::UnsupportedRef(reference) => write!(f, "unsupported reference {reference:?}"),
            Self::CyclicRef(reference) => write!(f, "reference cycle through {reference:?}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireDocument {
    info: WireInfo,
    servers: Vec<WireServer>,
    #[serde(deserialize_with = "without_extensions")]
    paths: BTreeMap<String, WirePathItem>,
    components: WireComponents,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireInfo {
    title: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireServer {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WirePathItem {
    get: Option<WireOperation>,
    post: Option<WireOperation>,
    put: Option<WireOperation>,
    patch: Option<WireOperation>,
    delete: Option<WireOperation>,
}

impl WirePathItem {
    fn operation(&self, method: HttpMethod) -> Option<&WireOperation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireOperation {
    summary: Option<String>,
    description: Option<String>,
    tags: Vec<SmolStr>,
    #[serde(deserialize_with = "without_extensions")]
    responses: BTreeMap<String, RefOr<WireResponse>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResponse {
    description: Option<String>,
    headers: BTreeMap<String, RefOr<WireHeader>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireHeader {
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireComponents {
    responses: BTreeMap<String, RefOr<WireResponse>>,
    headers: BTreeMap<String, RefOr<WireHeader>>,
}

/// Map of named entries that may also carry `x-` extension keys; extensions are dropped
/// before the entries are typed.
fn without_extensions<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    raw.into_iter()
        .filter(|(key, _)| !key.starts_with(EXTENSION_PREFIX))
        .map(|(key, value)| {
            let entry = serde_json::from_value(value)
                .map_err(|err| D::Error::custom(format!("{key:?}: {err}")))?;
            Ok((key, entry))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RefOr<T> {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Item(T),
}

impl WireDocument {
    fn into_document(self) -> Result<SpecDocument, DocumentError> {
        let mut endpoints = Vec::new();
        for (path, item) in &self.paths {
            for method in HttpMethod::ALL {
                let Some(operation) = item.operation(method) else {
                    continue;
                };
                endpoints.push(self.endpoint(path, method, operation)?);
            }
        }

        let servers = self.servers.into_iter().map(|server| server.url).collect();
        Ok(SpecDocument::new(endpoints)
            .with_info(self.info.title, self.info.version)
            .with_servers(servers))
    }

    fn endpoint(
        &self,
        path: &str,
        method: HttpMethod,
        operation: &WireOperation,
    ) -> Result<Endpoint, DocumentError> {
        let mut endpoint = Endpoint::new(path, method)
            .with_summary(operation.summary.clone())
            .with_description(operation.description.clone())
            .with_tags(operation.tags.iter().cloned());
        for (status, response) in &operation.responses {
            endpoint = endpoint.with_response(status.as_str(), self.response(response)?);
        }
        Ok(endpoint)
    }

    fn response(&self, response: &RefOr<WireResponse>) -> Result<Response, DocumentError> {
        let wire = resolve(response, &self.components.responses, COMPONENT_RESPONSES_PREFIX)?;
        let mut resolved = Response::new(wire.description.clone().unwrap_or_default());
        for (name, header) in &wire.headers {
            let header = resolve(header, &self.components.headers, COMPONENT_HEADERS_PREFIX)?;
            let description = header.description.clone().unwrap_or_default();
            resolved = resolved.with_header(name.as_str(), description);
        }
        Ok(resolved)
    }
}

fn resolve<'a, T>(
    mut item: &'a RefOr<T>,
    components: &'a BTreeMap<String, RefOr<T>>,
    prefix: &str,
) -> Result<&'a T, DocumentError> {
    for _ in 0..MAX_REF_DEPTH {
        match item {
            RefOr::Item(value) => return Ok(value),
            RefOr::Ref { reference } => {
                let Some(name) = reference.strip_prefix(prefix) else {
                    return Err(DocumentError::UnsupportedRef(reference.clone()));
                };
                item = components
                    .get(name)
                    .ok_or_else(|| DocumentError::UnresolvedRef(reference.clone()))?;
            }
        }
    }

    match item {
        RefOr::Item(value) => Ok(value),
        RefOr::Ref { reference } => Err(DocumentError::CyclicRef(reference.clone())),
    }
}
