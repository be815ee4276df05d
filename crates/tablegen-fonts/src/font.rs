//! Resolved fonts: metrics, measurement and glyph placement.

use std::sync::Arc;

use dashmap::DashMap;
use tablegen_types::FontStyle;
use tiny_skia::Path;

use crate::glyph::{outline_glyph, tofu_box};

/// Characters whose bounding boxes define the line height.
const LINE_SAMPLE: [char; 2] = ['A', 'g'];

/// First and count of the printable ASCII characters whose advances are
/// precomputed.
const ASCII_FIRST: u8 = b' ';
const ASCII_COUNT: usize = 95;

// Built-in font metrics, in units of a 1000-unit em.
const BUILTIN_UNITS_PER_EM: f32 = 1000.0;
const BUILTIN_ADVANCE: f32 = 600.0;
const BUILTIN_TOP: f32 = 900.0;
const BUILTIN_BOTTOM: f32 = -300.0;
const BUILTIN_STROKE: f32 = 60.0;

/// Vertical metrics in design units (y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
struct FaceMetrics {
    units_per_em: f32,
    /// Highest point of the line sample, above the baseline.
    line_top: f32,
    /// Lowest point of the line sample, usually below the baseline.
    line_bottom: f32,
}

/// Horizontal advances in design units, filled once per face.
///
/// Printable ASCII is read when the font is built; anything else is
/// remembered the first time it is measured.
#[derive(Debug, Clone)]
struct Advances {
    ascii: [f32; ASCII_COUNT],
    other: DashMap<char, f32>,
}

impl Advances {
    fn from_face(face: &ttf_parser::Face<'_>) -> Self {
        Self {
            ascii: std::array::from_fn(|i| advance(face, char::from(ASCII_FIRST + i as u8))),
            other: DashMap::new(),
        }
    }

    fn cached(&self, c: char) -> Option<f32> {
        let ascii = u32::from(c)
            .checked_sub(u32::from(ASCII_FIRST))
            .and_then(|i| self.ascii.get(i as usize));
        match ascii {
            Some(units) => Some(*units),
            None => self.other.get(&c).map(|units| *units),
        }
    }

    fn remember(&self, c: char, units: f32) {
        self.other.insert(c, units);
    }
}

#[derive(Debug, Clone)]
enum Face {
    /// A parsed OpenType/TrueType face.
    Outline {
        data: Arc<Vec<u8>>,
        index: u32,
        advances: Advances,
    },
    /// Fixed-advance box font used when no font file is available.
    Builtin,
}

/// A glyph positioned along a line.
#[derive(Debug, Clone)]
pub struct PlacedGlyph {
    /// Pen position in pixels from the start of the line.
    pub x: f32,
    /// Outline in design units; `None` for blank glyphs.
    pub path: Option<Path>,
}

/// A font at a specific size and style.
#[derive(Debug, Clone)]
pub struct Font {
    family: String,
    size: f32,
    style: FontStyle,
    face: Face,
    metrics: FaceMetrics,
}

impl Font {
    /// Build a font from raw face data.
    ///
    /// Returns `None` if the data does not parse.
    pub fn from_data(
        family: impl Into<String>,
        data: Arc<Vec<u8>>,
        index: u32,
        size: f32,
        style: FontStyle,
    ) -> Option<Self> {
        let (metrics, advances) = {
            let face = ttf_parser::Face::parse(&data, index).ok()?;
            (outline_metrics(&face), Advances::from_face(&face))
        };
        Some(Self {
            family: family.into(),
            size,
            style,
            face: Face::Outline {
                data,
                index,
                advances,
            },
            metrics,
        })
    }

    /// The built-in box font. Always available.
    pub fn builtin(size: f32, style: FontStyle) -> Self {
        Self {
            family: "builtin".to_string(),
            size,
            style,
            face: Face::Builtin,
            metrics: FaceMetrics {
                units_per_em: BUILTIN_UNITS_PER_EM,
                line_top: BUILTIN_TOP,
                line_bottom: BUILTIN_BOTTOM,
            },
        }
    }

    /// Family name of the face actually used.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin)
    }

    /// Design units to pixels.
    pub fn scale(&self) -> f32 {
        self.size / self.metrics.units_per_em
    }

    /// Height of one line of text, from the "Ag" bounding boxes.
    pub fn line_height(&self) -> f32 {
        (self.metrics.line_top - self.metrics.line_bottom) * self.scale()
    }

    /// Distance from the top of a line to its baseline.
    pub fn baseline(&self) -> f32 {
        self.metrics.line_top * self.scale()
    }

    /// Single-line advance width of `text` in pixels.
    pub fn measure_width(&self, text: &str) -> f32 {
        let units: f32 = match &self.face {
            Face::Builtin => {
                text.chars().filter(|c| !c.is_control()).count() as f32 * BUILTIN_ADVANCE
            },
            Face::Outline {
                data,
                index,
                advances,
            } => {
                // Parsed only when a character is not cached yet.
                let mut face = None;
                let mut units = 0.0;
                for c in text.chars().filter(|c| !c.is_control()) {
                    units += match advances.cached(c) {
                        Some(a) => a,
                        None => {
                            if face.is_none() {
                                face = ttf_parser::Face::parse(data, *index).ok();
                            }
                            let a = face.as_ref().map_or(0.0, |f| advance(f, c));
                            advances.remember(c, a);
                            a
                        },
                    };
                }
                units
            },
        };
        units * self.scale()
    }

    /// Glyphs for `text` with their pen positions.
    pub fn layout_glyphs(&self, text: &str) -> Vec<PlacedGlyph> {
        let scale = self.scale();
        let mut pen = 0.0;
        let mut glyphs = Vec::with_capacity(text.len());

        match &self.face {
            Face::Builtin => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    let path = if c.is_whitespace() {
                        None
                    } else {
                        tofu_box(50.0, 0.0, BUILTIN_ADVANCE - 50.0, 700.0, BUILTIN_STROKE)
                    };
                    glyphs.push(PlacedGlyph { x: pen, path });
                    pen += BUILTIN_ADVANCE * scale;
                }
            },
            Face::Outline { data, index, .. } => {
                let Ok(face) = ttf_parser::Face::parse(data, *index) else {
                    return glyphs;
                };
                for c in text.chars().filter(|c| !c.is_control()) {
                    let id = face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
                    glyphs.push(PlacedGlyph {
                        x: pen,
                        path: outline_glyph(&face, id),
                    });
                    pen += advance(&face, c) * scale;
                }
            },
        }
        glyphs
    }
}

/// Horizontal advance of `c` in design units, `.notdef` for missing
/// characters.
fn advance(face: &ttf_parser::Face<'_>, c: char) -> f32 {
    let id = face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
    face.glyph_hor_advance(id).map_or(0.0, f32::from)
}

/// Line metrics from the union of the sample glyph boxes, falling back
/// to the face's ascender and descender.
fn outline_metrics(face: &ttf_parser::Face<'_>) -> FaceMetrics {
    let mut top = f32::MIN;
    let mut bottom = f32::MAX;
    for c in LINE_SAMPLE {
        let bbox = face
            .glyph_index(c)
            .and_then(|id| face.glyph_bounding_box(id));
        if let Some(b) = bbox {
            top = top.max(f32::from(b.y_max));
            bottom = bottom.min(f32::from(b.y_min));
        }
    }
    if top <= bottom {
        top = f32::from(face.ascender());
        bottom = f32::from(face.descender());
    }
    if top <= bottom {
        // Degenerate face: fall back to a 1em line.
        top = f32::from(face.units_per_em());
        bottom = 0.0;
    }
    FaceMetrics {
        units_per_em: f32::from(face.units_per_em()).max(1.0),
        line_top: top,
        line_bottom: bottom,
    }
}
