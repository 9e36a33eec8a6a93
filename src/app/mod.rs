//! Application state types and entry glue.
//!
//! Wraps the users [`Store`] with what only the terminal view needs: which
//! input has focus, the highlighted row, theme and keymap. The event loop
//! lives in [`update`] and is re-exported as `run`.
//!
pub mod keymap;
pub mod update;

use std::path::Path;

use ratatui::style::Color;

use crate::filter::FilterField;
use crate::store::Store;
use keymap::Keymap;

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0x89, 0xb4, 0xfa),        // blue
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            accent: Color::Rgb(0xcb, 0xa6, 0xf7),       // mauve
            error: Color::Rgb(0xf3, 0x8b, 0xa8),        // red
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    /// Use the theme file when it exists, otherwise `mocha`.
    pub fn load(path: &Path) -> Self {
        Self::from_file(path).unwrap_or_else(Self::mocha)
    }

    fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "accent" => theme.accent = color,
                    "error" => theme.error = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range).and_then(|h| u8::from_str_radix(h, 16).ok())
        };
        Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

pub struct AppState {
    pub store: Store,
    pub focus: FilterField,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub theme: Theme,
    pub keymap: Keymap,
    pub show_help: bool,
    pub should_quit: bool,
    mounted: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            store: Store::new(),
            focus: FilterField::Name,
            selected_index: 0,
            rows_per_page: 10,
            theme,
            keymap: Keymap::default(),
            show_help: false,
            should_quit: false,
            mounted: false,
        }
    }

    /// Returns `true` exactly once, on the first call.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Keep the highlighted row inside the filtered list.
    pub fn clamp_selection(&mut self) {
        let len = self.store.state().filtered_users().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_file_overrides_known_keys() {
        let theme = Theme::parse(
            "# comment\n\
             text = #FF0000\n\
             error = 00ff00\n\
             highlight_bg = reset\n\
             bogus = #123456\n\
             border = not-a-color\n",
        );
        assert_eq!(theme.text, Color::Rgb(0xff, 0, 0));
        assert_eq!(theme.error, Color::Rgb(0, 0xff, 0));
        assert_eq!(theme.highlight_bg, Color::Reset);
        assert_eq!(theme.border, Theme::mocha().border);
    }

    #[test]
    fn mount_fires_once() {
        let mut app = AppState::default();
        assert!(app.mount());
        assert!(!app.mount());
        assert!(!app.mount());
    }
}
