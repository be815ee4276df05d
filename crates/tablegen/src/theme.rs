//! Built-in table themes.
//!
//! A theme is four styles: the table root, the header section, plain
//! body rows and alternating (odd) body rows.

use serde::{Deserialize, Serialize};
use tablegen_layout::{HAlign, Style, VAlign};
use tablegen_types::{Color, FontStyle, Padding};

/// Named theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Minimal,
    Compact,
}

/// The styles a theme contributes to a generated table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableTheme {
    pub table: Style,
    pub header: Style,
    pub row: Style,
    pub alternating_row: Style,
}

impl ThemeMode {
    pub fn theme(self) -> TableTheme {
        match self {
            Self::Light => light(),
            Self::Dark => dark(),
            Self::Minimal => minimal(),
            Self::Compact => compact(),
        }
    }
}

impl From<ThemeMode> for TableTheme {
    fn from(mode: ThemeMode) -> Self {
        mode.theme()
    }
}

// -------------------------------------------------------------------
// Palettes
// -------------------------------------------------------------------

fn base(background: Color, text: Color, border: Option<Color>, border_width: f32) -> Style {
    Style {
        background: Some(background),
        text_color: Some(text),
        border_color: border,
        border_width: Some(border_width),
        h_align: Some(HAlign::Left),
        v_align: Some(VAlign::Top),
        font_family: Some("Arial".to_string()),
        font_size: Some(12.0),
        font_style: Some(FontStyle::Regular),
        ..Style::default()
    }
}

fn stripe(background: Color) -> Style {
    Style {
        background: Some(background),
        ..Style::default()
    }
}

fn light() -> TableTheme {
    TableTheme {
        table: Style {
            padding: Some(Padding::uniform(8.0)),
            ..base(Color::WHITE, Color::BLACK, Some(Color::rgb(0xE0, 0xE0, 0xE0)), 1.0)
        },
        header: Style {
            background: Some(Color::rgb(0xF5, 0xF5, 0xF5)),
            text_color: Some(Color::BLACK),
            font_style: Some(FontStyle::Bold),
            padding: Some(Padding::uniform(10.0)),
            ..Style::default()
        },
        row: Style::default(),
        alternating_row: stripe(Color::rgb(0xFA, 0xFA, 0xFA)),
    }
}

fn dark() -> TableTheme {
    TableTheme {
        table: Style {
            padding: Some(Padding::uniform(8.0)),
            ..base(
                Color::rgb(0x1E, 0x1E, 0x1E),
                Color::rgb(0xE0, 0xE0, 0xE0),
                Some(Color::rgb(0x3E, 0x3E, 0x3E)),
                1.0,
            )
        },
        header: Style {
            background: Some(Color::rgb(0x2D, 0x2D, 0x2D)),
            text_color: Some(Color::WHITE),
            font_style: Some(FontStyle::Bold),
            padding: Some(Padding::uniform(10.0)),
            ..Style::default()
        },
        row: Style::default(),
        alternating_row: stripe(Color::rgb(0x25, 0x25, 0x25)),
    }
}

fn minimal() -> TableTheme {
    TableTheme {
        table: Style {
            padding: Some(Padding::symmetric(12.0, 8.0)),
            ..base(Color::WHITE, Color::BLACK, None, 0.0)
        },
        header: Style {
            text_color: Some(Color::rgb(0x66, 0x66, 0x66)),
            font_style: Some(FontStyle::Bold),
            padding: Some(Padding::uniform(12.0)),
            border_bottom: Some(2.0),
            border_color: Some(Color::rgb(0xE0, 0xE0, 0xE0)),
            ..Style::default()
        },
        row: Style::default(),
        alternating_row: Style::default(),
    }
}

fn compact() -> TableTheme {
    TableTheme {
        table: Style {
            padding: Some(Padding::uniform(4.0)),
            font_size: Some(10.0),
            ..base(Color::WHITE, Color::BLACK, Some(Color::rgb(0xCC, 0xCC, 0xCC)), 1.0)
        },
        header: Style {
            background: Some(Color::rgb(0xF0, 0xF0, 0xF0)),
            text_color: Some(Color::BLACK),
            font_style: Some(FontStyle::Bold),
            padding: Some(Padding::symmetric(6.0, 4.0)),
            ..Style::default()
        },
        row: Style::default(),
        alternating_row: stripe(Color::rgb(0xF8, 0xF8, 0xF8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ThemeMode; 4] = [
        ThemeMode::Light,
        ThemeMode::Dark,
        ThemeMode::Minimal,
        ThemeMode::Compact,
    ];

    #[test]
    fn table_styles_are_complete_for_text() {
        for mode in ALL {
            let t = mode.theme();
            assert!(t.table.background.is_some(), "{mode:?}");
            assert!(t.table.text_color.is_some(), "{mode:?}");
            assert!(t.table.padding.is_some(), "{mode:?}");
            assert!(t.table.font_size.is_some(), "{mode:?}");
            assert_eq!(t.header.font_style, Some(FontStyle::Bold), "{mode:?}");
        }
    }

    #[test]
    fn dark_palette() {
        let t = ThemeMode::Dark.theme();
        assert_eq!(t.table.background, Some(Color::rgb(0x1E, 0x1E, 0x1E)));
        assert_eq!(t.table.text_color, Some(Color::rgb(0xE0, 0xE0, 0xE0)));
        assert_eq!(t.header.background, Some(Color::rgb(0x2D, 0x2D, 0x2D)));
        assert_eq!(t.alternating_row.background, Some(Color::rgb(0x25, 0x25, 0x25)));
    }

    #[test]
    fn minimal_has_no_grid_lines() {
        let t = ThemeMode::Minimal.theme();
        let edges = t.table.border_edges();
        assert!(edges.is_zero());
        let header = t.table.merge(Some(&t.header)).border_edges();
        assert_eq!(header.bottom, 2.0);
        assert_eq!(header.top, 0.0);
        assert!(t.alternating_row.is_empty());
    }

    #[test]
    fn compact_is_smaller() {
        let t = ThemeMode::Compact.theme();
        assert_eq!(t.table.font_size, Some(10.0));
        assert_eq!(t.table.padding, Some(Padding::uniform(4.0)));
        assert_eq!(t.header.padding, Some(Padding::symmetric(6.0, 4.0)));
    }

    #[test]
    fn mode_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Doc {
            theme: ThemeMode,
        }
        let doc: Doc = toml::from_str("theme = \"compact\"").unwrap();
        assert_eq!(doc.theme, ThemeMode::Compact);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
