use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::palette::{Palette, PaletteError};
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes generated palettes by `(kind, size)`.
#[derive(Debug, Default)]
pub struct PaletteCache {
    palettes: HashMap<(PaletteKind, usize), Arc<Palette>>,
}

impl PaletteCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, kind: PaletteKind, size: usize) -> Result<Arc<Palette>, PaletteError> {
        if let Some(palette) = self.palettes.get(&(kind, size)) {
            return Ok(Arc::clone(palette));
        }

        let palette = Arc::new(Palette::generate(kind, size)?);
        log::debug!("generated {} palette with {} colours", kind, size);
        self.palettes.insert((kind, size), Arc::clone(&palette));

        Ok(palette)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
