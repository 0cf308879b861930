// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, and row helpers used by TUI rendering.
fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Outline,
    Detail,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Outline => Self::Detail,
            Self::Detail => Self::Outline,
        }
    }
}

fn view_title(label: &str, key: &str, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

/// `title version · server (+N more)`, skipping whatever the document leaves out.
fn document_header(document: &SpecDocument) -> String {
    let mut parts = Vec::<String>::new();
    let name = match (document.title(), document.version()) {
        (Some(title), Some(version)) => format!("{title} {version}"),
        (Some(title), None) => title.to_owned(),
        (None, Some(version)) => version.to_owned(),
        (None, None) => String::new(),
    };
    if !name.is_empty() {
        parts.push(name);
    }

    if let Some(server) = document.primary_server() {
        let extra = document.servers().len().saturating_sub(1);
        if extra > 0 {
            parts.push(format!("{server} (+{extra} more)"));
        } else {
            parts.push(server.to_owned());
        }
    }

    parts.join(" · ")
}

fn outline_row_line(row: OutlineRow<'_>, theme: &TuiTheme) -> Line<'static> {
    match row {
        OutlineRow::Tag { node, .. } => {
            let marker = if node.is_expanded() { "▾ " } else { "▸ " };
            let label = match node.tag().name() {
                Some(name) => Span::styled(
                    name.to_owned(),
                    theme.base_style().add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(
                    theme.untagged_label().to_owned(),
                    theme.base_style().add_modifier(Modifier::ITALIC),
                ),
            };
            Line::from(vec![
                Span::styled(marker, theme.base_style()),
                label,
                Span::styled(format!(" ({})", node.leaves().len()), theme.muted_style()),
            ])
        }
        OutlineRow::Leaf { endpoint, .. } => {
            let mut spans = vec![
                Span::raw("    "),
                Span::styled(
                    endpoint.title(),
                    theme.base_style().fg(theme.method_color(endpoint.method())),
                ),
            ];
            if let Some(summary) = endpoint.summary() {
                spans.push(Span::styled(format!("  {summary}"), theme.muted_style()));
            }
            Line::from(spans)
        }
    }
}

fn detail_text(block: &DetailBlock, theme: &TuiTheme) -> Text<'static> {
    let lines = block
        .lines()
        .iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.segments().len() + 1);
            if line.indent() > 0 {
                spans.push(Span::raw(" ".repeat(line.indent() * INDENT_WIDTH)));
            }
            spans.extend(line.segments().iter().map(|segment| segment_span(segment, theme)));
            Line::from(spans)
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

fn segment_span(segment: &Segment, theme: &TuiTheme) -> Span<'static> {
    let mut style = theme.tone_style(segment.tone());
    if segment.is_bold() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if segment.is_italic() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    Span::styled(segment.text().to_owned(), style)
}

fn empty_detail_text(theme: &TuiTheme) -> Text<'static> {
    Text::from(Line::from(Span::styled(
        "Select an endpoint and press Enter.",
        theme.muted_style(),
    )))
}

fn footer_help_line(focus: Focus, compact: bool, theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    if compact {
        push_footer_entry(&mut spans, "FOCUS", "tab", theme);
        push_footer_entry(&mut spans, "QUIT", "q", theme);
        return Line::from(spans);
    }

    push_footer_entry(&mut spans, "ENDPOINTS", "e", theme);
    push_footer_entry(&mut spans, "FOCUS", "tab", theme);
    match focus {
        Focus::Outline => {
            push_footer_entry(&mut spans, "SELECT", "enter", theme);
            push_footer_entry(&mut spans, "OPEN/CLOSE", "→/←", theme);
        }
        Focus::Detail => {
            push_footer_entry(&mut spans, "SCROLL", "j/k", theme);
        }
    }
    push_footer_entry(&mut spans, "TOP/BOTTOM", "gg/G", theme);
    push_footer_entry(&mut spans, "QUIT", "q", theme);
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str, theme: &TuiTheme) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", theme.footer_label_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.footer_label_style(),
    ));
    spans.push(Span::styled(
        key.to_owned(),
        theme.footer_key_style().add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
