// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::endpoint::Endpoint;

/// A loaded API description: document metadata plus every operation it defines.
///
/// Built by the store from the on-disk format; every `$ref` is already resolved, so
/// downstream code never has to handle a half-valid operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    title: Option<String>,
    version: Option<String>,
    servers: Vec<String>,
    endpoints: Vec<Endpoint>,
}

impl SpecDocument {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }

    pub fn with_info(mut self, title: Option<String>, version: Option<String>) -> Self {
        self.title = title;
        self.version = version;
        self
    }

    pub fn with_servers(mut self, servers: Vec<String>) -> Self {
        self.servers = servers;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn servers(&self) -> &[String] {
        &self.servers
    }

    /// First declared server URL, if any.
    ///
    /// Callers that display it should also check [`Self::is_multi_server`]; the
    /// document does not say which server is canonical.
    pub fn primary_server(&self) -> Option<&str> {
        self.servers.first().map(String::as_str)
    }

    pub fn is_multi_server(&self) -> bool {
        self.servers.len() > 1
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}
