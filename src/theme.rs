use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::config;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub focus_border: Style,
    pub status: Style,
    pub selected: Style,
    pub overdue: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub alert: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            focus_border: Style::default().fg(Color::Cyan),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            overdue: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::White).bg(Color::Gray),
            alert: Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }
}

impl Theme {
    pub fn load() -> Option<Self> {
        let path = theme_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        let config: ThemeConfig = toml::from_str(&content).ok()?;
        Some(config.into_theme())
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        let fg = Color::Rgb(248, 248, 242);
        let current_line = Color::Rgb(68, 71, 90);
        Self {
            header: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(current_line),
            focus_border: Style::default().fg(Color::Rgb(139, 233, 253)),
            status: Style::default().fg(fg).bg(current_line),
            selected: Style::default().bg(current_line).add_modifier(Modifier::BOLD),
            overdue: Style::default()
                .fg(Color::Rgb(255, 85, 85))
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(189, 147, 249))
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(fg).bg(current_line),
            alert: Style::default().fg(Color::Black).bg(Color::Rgb(241, 250, 140)),
        }
    }

    fn nord() -> Self {
        let snow = Color::Rgb(229, 233, 240);
        let polar = Color::Rgb(67, 76, 94);
        Self {
            header: Style::default().fg(snow).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(polar),
            focus_border: Style::default().fg(Color::Rgb(136, 192, 208)),
            status: Style::default().fg(snow).bg(polar),
            selected: Style::default().bg(polar).add_modifier(Modifier::BOLD),
            overdue: Style::default()
                .fg(Color::Rgb(191, 97, 106))
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(129, 161, 193))
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(snow).bg(polar),
            alert: Style::default().fg(Color::Black).bg(Color::Rgb(235, 203, 139)),
        }
    }
}

fn theme_path() -> Option<PathBuf> {
    config::config_dir().map(|d| d.join("theme.toml"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    focus_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    selected_bg: Option<String>,
    overdue_fg: Option<String>,
    button_bg: Option<String>,
    alert_bg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        if let Some(c) = self.header_fg.as_deref().and_then(parse_color) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.focus_fg.as_deref().and_then(parse_color) {
            theme.focus_border = theme.focus_border.fg(c);
        }
        if let Some(c) = self.status_fg.as_deref().and_then(parse_color) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.selected_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.overdue_fg.as_deref().and_then(parse_color) {
            theme.overdue = theme.overdue.fg(c);
        }
        if let Some(c) = self.button_bg.as_deref().and_then(parse_color) {
            theme.button = theme.button.bg(c);
        }
        if let Some(c) = self.alert_bg.as_deref().and_then(parse_color) {
            theme.alert = theme.alert.bg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightblue" => Some(Color::LightBlue),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color(" Red "), Some(Color::Red));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_overrides_apply_on_preset() {
        let config: ThemeConfig = toml::from_str(
            r##"
            preset = "nord"
            overdue_fg = "#112233"
            status_bg = "black"
            "##,
        )
        .unwrap();
        let theme = config.into_theme();
        assert_eq!(theme.overdue.fg, Some(Color::Rgb(0x11, 0x22, 0x33)));
        assert_eq!(theme.status.bg, Some(Color::Black));
        assert_eq!(theme.header.fg, Theme::nord().header.fg);
    }

    #[test]
    fn test_unknown_preset_is_default() {
        assert_eq!(Theme::preset("solarized").overdue, Theme::default().overdue);
    }
}
