// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A loaded document is a flat list of endpoints (path + method) with their response
//! metadata; tags are the grouping keys the outline is built from.

pub mod document;
pub mod endpoint;
pub(crate) mod fixtures;
pub mod method;
pub mod tag;

pub use document::SpecDocument;
pub use endpoint::{Endpoint, Response};
pub use method::HttpMethod;
pub use tag::Tag;
