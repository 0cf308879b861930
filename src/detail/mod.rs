// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Endpoint detail formatting.
//!
//! [`DetailFormatter::render`] turns one endpoint into a [`DetailBlock`]: indented lines of
//! styled segments. Styling is kept as data ([`Tone`] plus bold/italic flags); the TUI maps
//! it to terminal colors when drawing.

use crate::model::{Endpoint, HttpMethod, Response};

pub const INDENT_WIDTH: usize = 4;
const LABEL_WIDTH: usize = 12;

/// Semantic color slot of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Label,
    Method(HttpMethod),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    tone: Tone,
    bold: bool,
    italic: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
            bold: false,
            italic: false,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Label,
            bold: false,
            italic: true,
        }
    }

    pub fn method(method: HttpMethod, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Method(method),
            bold: true,
            italic: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailLine {
    indent: usize,
    segments: Vec<Segment>,
}

impl DetailLine {
    fn new(indent: usize, segments: Vec<Segment>) -> Self {
        Self { indent, segments }
    }

    fn blank() -> Self {
        Self::default()
    }

    /// Nesting depth; one level is [`INDENT_WIDTH`] columns.
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn to_plain_string(&self) -> String {
        let mut out = " ".repeat(self.indent * INDENT_WIDTH);
        for segment in &self.segments {
            out.push_str(segment.text());
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailBlock {
    lines: Vec<DetailLine>,
}

impl DetailBlock {
    pub fn lines(&self) -> &[DetailLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Unstyled text, one line per row, trailing whitespace trimmed.
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.to_plain_string().trim_end().to_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, indent: usize, segments: Vec<Segment>) {
        self.lines.push(DetailLine::new(indent, segments));
    }
}

/// Renders endpoints into detail blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailFormatter;

impl DetailFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, endpoint: &Endpoint) -> DetailBlock {
        let mut block = DetailBlock::default();

        block.push(0, vec![Segment::method(endpoint.method(), endpoint.title())]);
        block.lines.push(DetailLine::blank());
        block.push(0, field("Description", endpoint.description().unwrap_or_default()));

        let tags = endpoint.tags().iter().map(|tag| tag.as_str()).collect::<Vec<_>>().join(", ");
        block.push(0, field("Tags", &tags));

        block.push(0, vec![padded_label("Responses"), Segment::plain(":")]);
        for (status, response) in endpoint.responses() {
            push_response(&mut block, status, response);
        }

        block
    }
}

fn push_response(block: &mut DetailBlock, status: &str, response: &Response) {
    block.push(1, vec![Segment::label(status), Segment::plain(":")]);
    block.push(2, field("Description", response.description()));
    if response.headers().is_empty() {
        return;
    }

    block.push(2, vec![padded_label("Headers"), Segment::plain(":")]);
    for (name, description) in response.headers() {
        block.push(
            3,
            vec![Segment::label(name.as_str()), Segment::plain(format!(": {description}"))],
        );
    }
}

fn field(label: &str, value: &str) -> Vec<Segment> {
    vec![padded_label(label), Segment::plain(format!(": {value}"))]
}

fn padded_label(label: &str) -> Segment {
    Segment::label(format!("{label:<width$}", width = LABEL_WIDTH))
}
