//! Application state types and entry glue.
//!
//! Defines the TUI-side state wrapped around the table controller, the color
//! theme, and re-exports the event loop entry point.
pub mod update;

use ratatui::style::Color;
use std::time::Instant;

use crate::table::TableController;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub title: Color,
    pub border: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Theme {
    /// Catppuccin Mocha defaults.
    pub fn mocha() -> Self {
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            title: Color::Rgb(0xcb, 0xa6, 0xf7),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight: Color::Rgb(0xf9, 0xe2, 0xaf),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }

    /// Load theme from a key=value file. Unknown or malformed keys fall back
    /// to the mocha defaults.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            if let Some(color) = Self::parse_color(val) {
                match key.trim() {
                    "text" => theme.text = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight" => theme.highlight = color,
                    "error" => theme.error = color,
                    _ => {}
                }
            }
        }

        Some(theme)
    }

    /// Parse "#RRGGBB" / "RRGGBB", or "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(&lower);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    /// Persist the theme in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
                _ => "reset".to_string(),
            }
        }

        let mut buf = String::new();
        buf.push_str("# usertable theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");
        for (key, color) in [
            ("text", self.text),
            ("title", self.title),
            ("border", self.border),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight", self.highlight),
            ("error", self.error),
        ] {
            buf.push_str(&format!("{key} = {}\n", color_to_str(color)));
        }
        std::fs::write(path, buf)
    }

    /// Load the theme from `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_or_init(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let theme = Self::mocha();
        let _ = theme.write_file(path);
        theme
    }
}

pub struct AppState {
    pub started_at: Instant,
    pub table: TableController,
    pub input_mode: InputMode,
    /// Row selection within the current page, clamped at render time.
    pub selected_row: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            started_at: Instant::now(),
            table: TableController::new(page_size),
            input_mode: InputMode::Normal,
            selected_row: 0,
            theme: Theme::load_or_init("theme.conf"),
        }
    }

    /// Like [`AppState::new`] but without touching the filesystem for the
    /// theme; used by tests.
    pub fn with_theme(page_size: usize, theme: Theme) -> Self {
        Self {
            started_at: Instant::now(),
            table: TableController::new(page_size),
            input_mode: InputMode::Normal,
            selected_row: 0,
            theme,
        }
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
