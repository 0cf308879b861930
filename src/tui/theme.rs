// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::detail::Tone;
use crate::model::HttpMethod;

pub(crate) const PALETTE_ENV: &str = "APISCOPE_TUI_PALETTE";
const UNTAGGED_LABEL: &str = "< untagged >";

/// Colors and labels used when drawing; built once at startup.
#[derive(Debug, Clone)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
    method_colors: [Ansi16; 5],
    untagged_label: String,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self {
            palette: None,
            method_colors: [
                Ansi16::Blue,
                Ansi16::Green,
                Ansi16::Yellow,
                Ansi16::Yellow,
                Ansi16::Red,
            ],
            untagged_label: UNTAGGED_LABEL.to_owned(),
        }
    }
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self {
            palette,
            ..Self::default()
        })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi_color(color.idx()),
            None => color.into(),
        }
    }

    pub(crate) fn method_color(&self, method: HttpMethod) -> Color {
        self.ansi_color(self.method_colors[method.rank()])
    }

    pub(crate) fn untagged_label(&self) -> &str {
        &self.untagged_label
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.ansi_color(Ansi16::BrightGreen))
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            self.base_style().bg(self.ansi_color(Ansi16::BrightBlack))
        }
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Cyan))
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::White))
    }

    pub(crate) fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => self.base_style(),
            Tone::Label => self.base_style().fg(self.ansi_color(Ansi16::White)),
            Tone::Method(method) => self.base_style().fg(self.method_color(method)),
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    /// Order of the comma-separated colors in `APISCOPE_TUI_PALETTE`.
    const SLOTS: [&'static str; 18] = [
        "fg",
        "bg",
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "white",
        "bright_black",
        "bright_red",
        "bright_green",
        "bright_yellow",
        "bright_blue",
        "bright_magenta",
        "bright_cyan",
        "bright_white",
    ];

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::SLOTS.len() {
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                Self::SLOTS.len(),
                Self::SLOTS.join(","),
                parts.len()
            ));
        }

        let colors = parts
            .iter()
            .zip(Self::SLOTS)
            .map(|(part, slot)| parse_palette_color(part).map_err(|err| format!("{slot}: {err}")))
            .collect::<Result<Vec<_>, _>>()?;

        let mut ansi = [Color::Reset; 16];
        ansi.copy_from_slice(&colors[2..]);
        Ok(Self {
            fg: colors[0],
            bg: colors[1],
            ansi,
        })
    }

    fn ansi_color(&self, idx: usize) -> Color {
        self.ansi[idx]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let value = match env::var(PALETTE_ENV) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: PALETTE_ENV.to_string(),
                value: "<non-unicode>".to_string(),
            });
        }
    };
    palette_override_from_value(&value)
}

fn palette_override_from_value(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB`, or X11 `rgb:RR/GG/BB` (2 or 4 digits per channel).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    if let Some(rest) = trimmed.get(..4).filter(|head| head.eq_ignore_ascii_case("rgb:")) {
        let channels = trimmed[rest.len()..]
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<u8>, _>>()?;
        return match channels[..] {
            [r, g, b] => Ok(Color::Rgb(r, g, b)),
            _ => Err(format!("invalid rgb: value {trimmed} (expected three channels)")),
        };
    }

    let hex = ["#", "0x", "0X"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color {trimmed} (expected #RRGGBB)"));
    }
    let channel = |at: usize| {
        u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| format!("invalid hex color {trimmed}"))
    };
    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    let invalid = || format!("invalid rgb: channel {value:?} (expected 2 or 4 hex digits)");
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| invalid()),
        4 => u16::from_str_radix(value, 16)
            .map(|wide| (wide >> 8) as u8)
            .map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// ANSI slots the theme refers to; a palette override remaps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Ansi16 {
    const fn idx(self) -> usize {
        self as usize
    }
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
