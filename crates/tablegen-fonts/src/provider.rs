//! Font lookup against a font database with a fixed fallback chain.

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use fontdb::{Database, Family, ID, Query};
use tablegen_types::{FontSpec, FontStyle, Result, TableError};

use crate::font::Font;

/// Families tried, in order, when the requested family is missing.
pub const FALLBACK_FAMILIES: &[&str] = &[
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "FreeSans",
    "Helvetica",
    "Segoe UI",
];

/// Resolves font requests to concrete faces.
///
/// Resolution order: requested family, each of [`FALLBACK_FAMILIES`],
/// the first face in the database, then the built-in box font.
pub struct FontProvider {
    db: Database,
    /// Face bytes shared across every size/style that uses them.
    face_data: DashMap<ID, Arc<Vec<u8>>>,
}

impl FontProvider {
    /// A provider with an empty database. Every request resolves to
    /// the built-in font until fonts are loaded.
    pub fn new() -> Self {
        Self {
            db: Database::new(),
            face_data: DashMap::new(),
        }
    }

    /// A provider over the platform's installed fonts.
    pub fn system() -> Self {
        let mut provider = Self::new();
        provider.db.load_system_fonts();
        log::debug!("loaded {} system font faces", provider.db.len());
        provider
    }

    /// Add every font file under `path`.
    pub fn load_fonts_dir(&mut self, path: impl AsRef<Path>) {
        let before = self.db.len();
        self.db.load_fonts_dir(path.as_ref());
        log::debug!(
            "loaded {} font faces from {}",
            self.db.len() - before,
            path.as_ref().display()
        );
    }

    /// Add a font from memory.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Font`] if the data is not a font file.
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<()> {
        ttf_parser::Face::parse(&data, 0).map_err(|e| TableError::Font(format!("{e:?}")))?;
        self.db.load_font_data(data);
        Ok(())
    }

    /// Number of faces available.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve `spec` to a font. Never fails.
    pub fn resolve(&self, spec: &FontSpec) -> Font {
        let candidates = std::iter::once(spec.family.as_str()).chain(
            FALLBACK_FAMILIES
                .iter()
                .copied()
                .filter(|f| !f.eq_ignore_ascii_case(&spec.family)),
        );

        for family in candidates {
            let Some(font) = self.query(family, spec.style).and_then(|id| self.load(id, spec)) else {
                continue;
            };
            if family != spec.family {
                log::warn!("font family {:?} not found, using {family:?}", spec.family);
            }
            return font;
        }

        if let Some(font) = self.db.faces().find_map(|face| self.load(face.id, spec)) {
            log::warn!(
                "no fallback family available for {:?}, using {:?}",
                spec.family,
                font.family()
            );
            return font;
        }

        log::warn!(
            "no usable font faces, drawing {:?} with the built-in font",
            spec.family
        );
        Font::builtin(spec.size, spec.style)
    }

    fn query(&self, family: &str, style: FontStyle) -> Option<ID> {
        let families = [Family::Name(family)];
        let query = Query {
            families: &families,
            weight: if style.is_bold() {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            stretch: fontdb::Stretch::Normal,
            style: if style.is_italic() {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
        };
        self.db.query(&query)
    }

    fn load(&self, id: ID, spec: &FontSpec) -> Option<Font> {
        let info = self.db.face(id)?;
        let family = info
            .families
            .first()
            .map_or_else(|| spec.family.clone(), |(name, _)| name.clone());
        let data = self.face_bytes(id)?;
        Font::from_data(family, data, info.index, spec.size, spec.style)
    }

    fn face_bytes(&self, id: ID) -> Option<Arc<Vec<u8>>> {
        if let Some(data) = self.face_data.get(&id) {
            return Some(Arc::clone(data.value()));
        }
        let data = self
            .db
            .with_face_data(id, |bytes, _index| Arc::new(bytes.to_vec()))?;
        self.face_data.insert(id, Arc::clone(&data));
        Some(data)
    }
}

impl Default for FontProvider {
    fn default() -> Self {
        Self::new()
    }
}
