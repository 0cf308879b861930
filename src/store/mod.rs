// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading API descriptions from disk.
//!
//! The store reads an OpenAPI JSON document, resolves component `$ref`s, and hands the
//! model a fully-resolved [`SpecDocument`](crate::model::SpecDocument).

pub mod spec_file;

pub use spec_file::{parse_document, DocumentError, LoadError, SpecFile, DEFAULT_SPEC_FILENAME};
