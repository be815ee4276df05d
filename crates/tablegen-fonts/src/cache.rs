//! Thread-safe memoizing font cache.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tablegen_layout::TextMeasurer;
use tablegen_types::{FontSpec, FontStyle};

use crate::font::Font;
use crate::provider::FontProvider;

/// Cache key: family, size (as raw bits, so it is hashable) and style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: String,
    pub size_bits: u32,
    pub style: FontStyle,
}

impl From<&FontSpec> for FontKey {
    fn from(spec: &FontSpec) -> Self {
        Self {
            family: spec.family.clone(),
            size_bits: spec.size.to_bits(),
            style: spec.style,
        }
    }
}

/// Resolved fonts keyed by request.
///
/// Get-or-create is atomic per key; requests for different keys do
/// not contend. Shared freely between threads.
///
/// The map only holds one cell per key. Resolution runs in the cell,
/// after the map's shard lock is released.
pub struct FontCache {
    provider: FontProvider,
    fonts: DashMap<FontKey, Arc<OnceCell<Arc<Font>>>>,
}

impl FontCache {
    pub fn new(provider: FontProvider) -> Self {
        Self {
            provider,
            fonts: DashMap::new(),
        }
    }

    /// Cache over the platform's installed fonts.
    pub fn system() -> Self {
        Self::new(FontProvider::system())
    }

    /// Font for `spec`, resolving and caching it on first use.
    pub fn get(&self, spec: &FontSpec) -> Arc<Font> {
        self.get_or_resolve(spec, || self.provider.resolve(spec))
    }

    fn get_or_resolve(&self, spec: &FontSpec, resolve: impl FnOnce() -> Font) -> Arc<Font> {
        let key = FontKey::from(spec);
        let cached = self.fonts.get(&key).map(|cell| Arc::clone(cell.value()));
        let cell = cached.unwrap_or_else(|| Arc::clone(self.fonts.entry(key).or_default().value()));
        Arc::clone(cell.get_or_init(|| Arc::new(resolve())))
    }

    /// Drop every cached font.
    pub fn clear(&self) {
        self.fonts.clear();
    }

    /// Number of cached fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn provider(&self) -> &FontProvider {
        &self.provider
    }
}

impl TextMeasurer for FontCache {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        self.get(font).measure_width(text)
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        self.get(font).line_height()
    }
}
