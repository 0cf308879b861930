// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// Grouping key of the outline.
///
/// `Untagged` is declared first so it sorts ahead of every named tag; named tags
/// compare byte-wise (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Untagged,
    Named(SmolStr),
}

impl Tag {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self::Named(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Untagged => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untagged => f.write_str("<untagged>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
