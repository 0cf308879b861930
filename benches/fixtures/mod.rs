// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use apiscope::index::EndpointIndex;
use apiscope::model::{Endpoint, HttpMethod, Response, SpecDocument};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub paths: usize,
    pub tags: usize,
    pub tags_per_endpoint: usize,
    pub responses: usize,
    pub headers_per_response: usize,
    pub description_len: usize,
}

impl Params {
    pub const fn new(
        paths: usize,
        tags: usize,
        tags_per_endpoint: usize,
        responses: usize,
        headers_per_response: usize,
        description_len: usize,
    ) -> Self {
        Self {
            paths,
            tags,
            tags_per_endpoint,
            responses,
            headers_per_response,
            description_len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeManyTags,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeManyTags => "large_many_tags",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(20, 4, 1, 2, 0, 32),
            Self::Medium => Params::new(200, 12, 2, 4, 2, 96),
            Self::LargeManyTags => Params::new(1000, 60, 3, 6, 3, 160),
        }
    }

    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeManyTags];
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn path_name(idx: usize) -> String {
    // Reverse-ish order so the index has real sorting to do.
    format!("/resource{:05}/items", 99_999 - idx)
}

fn tag_name(idx: usize) -> String {
    format!("tag{idx:03}")
}

/// Tags for one operation; every 7th operation stays untagged.
fn operation_tags(params: Params, op: usize) -> Vec<String> {
    if op % 7 == 0 || params.tags == 0 {
        return Vec::new();
    }
    (0..params.tags_per_endpoint)
        .map(|k| tag_name((op + k * 5) % params.tags))
        .collect()
}

fn status_code(idx: usize) -> String {
    match idx {
        0 => "200".to_owned(),
        1 => "default".to_owned(),
        _ => format!("{}", 400 + idx),
    }
}

fn header_name(idx: usize) -> String {
    format!("X-Header-{idx:02}")
}

/// Deterministic document: each path carries every method, tags rotate through the pool.
pub fn document(params: Params) -> SpecDocument {
    let mut endpoints = Vec::with_capacity(params.paths * HttpMethod::ALL.len());
    for path_idx in 0..params.paths {
        for (method_idx, method) in HttpMethod::ALL.iter().rev().enumerate() {
            let op = path_idx * HttpMethod::ALL.len() + method_idx;
            let description =
                ascii_repeat_to_len(&format!("Operation {op} "), 'd', params.description_len);
            let mut endpoint = Endpoint::new(path_name(path_idx), *method)
                .with_summary(Some(format!("op {op}")))
                .with_description(Some(description))
                .with_tags(operation_tags(params, op));
            for status in 0..params.responses {
                let mut response = Response::new(format!("response {status}"));
                for header in 0..params.headers_per_response {
                    response = response.with_header(header_name(header), "header description");
                }
                endpoint = endpoint.with_response(status_code(status), response);
            }
            endpoints.push(endpoint);
        }
    }
    SpecDocument::new(endpoints)
        .with_info(Some("Bench API".to_owned()), Some("1.0.0".to_owned()))
        .with_servers(vec!["https://bench.example".to_owned()])
}

/// The same document as OpenAPI JSON; responses go through `$ref`s to exercise resolution.
pub fn document_json(params: Params) -> String {
    let mut paths = Map::new();
    for path_idx in 0..params.paths {
        let mut item = Map::new();
        for (method_idx, method) in HttpMethod::ALL.iter().rev().enumerate() {
            let op = path_idx * HttpMethod::ALL.len() + method_idx;
            let description =
                ascii_repeat_to_len(&format!("Operation {op} "), 'd', params.description_len);
            let mut responses = Map::new();
            for status in 0..params.responses {
                responses.insert(
                    status_code(status),
                    json!({ "$ref": format!("#/components/responses/R{status}") }),
                );
            }
            item.insert(
                method.as_str().to_ascii_lowercase(),
                json!({
                    "summary": format!("op {op}"),
                    "description": description,
                    "tags": operation_tags(params, op),
                    "responses": responses,
                }),
            );
        }
        paths.insert(path_name(path_idx), Value::Object(item));
    }

    let mut components = Map::new();
    for status in 0..params.responses {
        let mut headers = Map::new();
        for header in 0..params.headers_per_response {
            headers.insert(header_name(header), json!({ "description": "header description" }));
        }
        components.insert(
            format!("R{status}"),
            json!({ "description": format!("response {status}"), "headers": headers }),
        );
    }

    json!({
        "openapi": "3.0.0",
        "info": { "title": "Bench API", "version": "1.0.0" },
        "servers": [{ "url": "https://bench.example" }],
        "paths": paths,
        "components": { "responses": components },
    })
    .to_string()
}

pub fn checksum_index(index: &EndpointIndex) -> u64 {
    let mut acc = 0u64;
    for (tag, bucket) in index.iter() {
        acc = acc.wrapping_mul(131).wrapping_add(tag.to_string().len() as u64);
        for endpoint in bucket {
            acc = acc
                .wrapping_mul(131)
                .wrapping_add(endpoint.path().len() as u64)
                .wrapping_add(endpoint.method().rank() as u64);
        }
    }
    acc
}

pub fn checksum_document(document: &SpecDocument) -> u64 {
    let mut acc = 0u64;
    for endpoint in document.endpoints() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(endpoint.path().len() as u64)
            .wrapping_add(endpoint.responses().len() as u64);
    }
    acc
}
