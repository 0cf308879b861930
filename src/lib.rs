// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Apiscope: terminal outline viewer for OpenAPI documents.
//!
//! The pipeline is `store` (JSON on disk to [`model::SpecDocument`]) then `index` (tag
//! grouping), then `nav` (outline state) and `detail` (endpoint text), with `tui` tying them
//! to a terminal.

pub mod detail;
pub mod index;
pub mod logging;
pub mod model;
pub mod nav;
pub mod store;
pub mod tui;
