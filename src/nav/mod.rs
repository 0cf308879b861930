// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Outline navigation state.
//!
//! The outline is two levels deep: one [`TagNode`] per index tag, each owning the endpoints
//! of its bucket. The cursor indexes the *visible* rows, i.e. every tag row followed by its
//! endpoint rows when (and only when) that tag is expanded.

use std::sync::Arc;

use crate::index::EndpointIndex;
use crate::model::{Endpoint, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    tag: Tag,
    expanded: bool,
    leaves: Vec<Arc<Endpoint>>,
}

impl TagNode {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn leaves(&self) -> &[Arc<Endpoint>] {
        &self.leaves
    }

    fn visible_len(&self) -> usize {
        if self.expanded {
            1 + self.leaves.len()
        } else {
            1
        }
    }
}

/// One visible outline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineRow<'a> {
    Tag {
        tag_index: usize,
        node: &'a TagNode,
    },
    Leaf {
        tag_index: usize,
        leaf_index: usize,
        endpoint: &'a Arc<Endpoint>,
    },
}

/// Outcome of `select_current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Toggled { tag: Tag, expanded: bool },
    Endpoint(Arc<Endpoint>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    nodes: Vec<TagNode>,
    cursor: usize,
    viewport_height: usize,
}

impl Outline {
    /// Builds a fully collapsed outline with the cursor on the first row.
    pub fn new(index: &EndpointIndex) -> Self {
        let nodes = index
            .iter()
            .map(|(tag, endpoints)| TagNode {
                tag: tag.clone(),
                expanded: false,
                leaves: endpoints.to_vec(),
            })
            .collect();
        Self {
            nodes,
            cursor: 0,
            viewport_height: 0,
        }
    }

    pub fn nodes(&self) -> &[TagNode] {
        &self.nodes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Records how many rows the outline pane currently shows; used for paging.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    pub fn visible_len(&self) -> usize {
        self.nodes.iter().map(TagNode::visible_len).sum()
    }

    pub fn visible_rows(&self) -> Vec<OutlineRow<'_>> {
        let mut rows = Vec::with_capacity(self.visible_len());
        for (tag_index, node) in self.nodes.iter().enumerate() {
            rows.push(OutlineRow::Tag { tag_index, node });
            if node.expanded {
                for (leaf_index, endpoint) in node.leaves.iter().enumerate() {
                    rows.push(OutlineRow::Leaf {
                        tag_index,
                        leaf_index,
                        endpoint,
                    });
                }
            }
        }
        rows
    }

    pub fn row_at(&self, row: usize) -> Option<OutlineRow<'_>> {
        let mut start = 0usize;
        for (tag_index, node) in self.nodes.iter().enumerate() {
            let len = node.visible_len();
            if row < start + len {
                let offset = row - start;
                if offset == 0 {
                    return Some(OutlineRow::Tag { tag_index, node });
                }
                let leaf_index = offset - 1;
                return Some(OutlineRow::Leaf {
                    tag_index,
                    leaf_index,
                    endpoint: &node.leaves[leaf_index],
                });
            }
            start += len;
        }
        None
    }

    pub fn current(&self) -> Option<OutlineRow<'_>> {
        self.row_at(self.cursor)
    }

    /// Toggles the tag under the cursor, or returns the endpoint under it.
    ///
    /// The cursor never moves; toggling a tag only changes rows *below* it.
    pub fn select_current(&mut self) -> Selection {
        match self.current() {
            Some(OutlineRow::Tag { tag_index, .. }) => {
                let node = &mut self.nodes[tag_index];
                node.expanded = !node.expanded;
                Selection::Toggled {
                    tag: node.tag.clone(),
                    expanded: node.expanded,
                }
            }
            Some(OutlineRow::Leaf { endpoint, .. }) => Selection::Endpoint(endpoint.clone()),
            None => Selection::Empty,
        }
    }

    /// Forces the tag under the cursor open. Returns whether anything changed.
    pub fn expand(&mut self) -> bool {
        self.set_current_expanded(true)
    }

    /// Forces the tag under the cursor closed. Returns whether anything changed.
    pub fn collapse(&mut self) -> bool {
        self.set_current_expanded(false)
    }

    fn set_current_expanded(&mut self, expanded: bool) -> bool {
        let Some(OutlineRow::Tag { tag_index, .. }) = self.current() else {
            return false;
        };
        let node = &mut self.nodes[tag_index];
        if node.expanded == expanded {
            return false;
        }
        node.expanded = expanded;
        true
    }

    /// Moves the cursor by `delta` rows, clamped to the visible rows.
    pub fn move_by(&mut self, delta: isize) {
        let last = self.visible_len().saturating_sub(1);
        let target = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta.unsigned_abs())
        };
        self.cursor = target.min(last);
    }

    pub fn half_page_down(&mut self) {
        self.move_by(to_delta(self.half_page()));
    }

    pub fn half_page_up(&mut self) {
        self.move_by(-to_delta(self.half_page()));
    }

    pub fn page_down(&mut self) {
        self.move_by(to_delta(self.full_page()));
    }

    pub fn page_up(&mut self) {
        self.move_by(-to_delta(self.full_page()));
    }

    pub fn jump_top(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    fn full_page(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn half_page(&self) -> usize {
        (self.viewport_height / 2).max(1)
    }
}

fn to_delta(rows: usize) -> isize {
    isize::try_from(rows).unwrap_or(isize::MAX)
}
