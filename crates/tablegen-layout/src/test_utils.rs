//! Shared test utilities for the layout engine.

use tablegen_types::{FontSpec, Padding};

use crate::measure::TextMeasurer;
use crate::model::{Cell, Row, Section, TableModel};
use crate::style::Style;

/// Deterministic measurer: each character is `size / 1.5` pixels wide
/// (8px at the default 12px font) and a line is `size * 4 / 3` tall
/// (16px at 12px).
pub struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size / 1.5
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        font.size * 4.0 / 3.0
    }
}

/// Table style with the given uniform padding and defaults otherwise.
pub fn padded_style(p: f32) -> Style {
    Style {
        padding: Some(Padding::uniform(p)),
        ..Style::table_default()
    }
}

/// Body-only model with every row built from plain texts.
pub fn body_model(rows: &[&[&str]], padding: f32) -> TableModel {
    TableModel {
        body: Section::new(rows.iter().map(|r| Row::from_texts(r.iter().copied())).collect()),
        style: padded_style(padding),
        ..TableModel::default()
    }
}

/// Body-only model from prebuilt rows.
pub fn model_from_rows(rows: Vec<Vec<Cell>>, padding: f32) -> TableModel {
    TableModel {
        body: Section::new(rows.into_iter().map(Row::new).collect()),
        style: padded_style(padding),
        ..TableModel::default()
    }
}
