// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font loading for the cover renderer.
//
// DejaVu Sans (regular and bold) is compiled in so every cover carries its
// text. Configured font files replace it.

use std::path::Path;

use ab_glyph::FontArc;
use coverpress_core::error::{CoverpressError, Result};
use tracing::{info, instrument};

const BUNDLED_REGULAR: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
const BUNDLED_BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

/// Regular and bold faces used on the cover page.
#[derive(Clone)]
pub struct CoverFonts {
    regular: FontArc,
    bold: FontArc,
}

impl CoverFonts {
    /// The compiled-in DejaVu Sans faces. Covers Latin and Arabic.
    pub fn bundled() -> Result<Self> {
        let regular = FontArc::try_from_slice(BUNDLED_REGULAR)
            .map_err(|err| CoverpressError::Font(format!("bundled regular font: {err}")))?;
        let bold = FontArc::try_from_slice(BUNDLED_BOLD)
            .map_err(|err| CoverpressError::Font(format!("bundled bold font: {err}")))?;
        Ok(Self { regular, bold })
    }

    /// Configured font files when `regular` is set, else the bundled faces.
    pub fn resolve(regular: Option<&Path>, bold: Option<&Path>) -> Result<Self> {
        match regular {
            Some(path) => Self::load(path, bold),
            None => Self::bundled(),
        }
    }

    /// Parse font data. Without a bold face the regular one is used for both.
    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self> {
        let regular = parse(regular, "regular")?;
        let bold = match bold {
            Some(data) => parse(data, "bold")?,
            None => regular.clone(),
        };
        Ok(Self { regular, bold })
    }

    /// Load fonts from TrueType/OpenType files.
    #[instrument(skip_all, fields(regular = %regular.display()))]
    pub fn load(regular: &Path, bold: Option<&Path>) -> Result<Self> {
        let regular_data = read(regular)?;
        let bold_data = bold.map(read).transpose()?;
        let fonts = Self::from_bytes(regular_data, bold_data)?;
        info!(bold = bold.is_some(), "Cover fonts loaded");
        Ok(fonts)
    }

    pub fn regular(&self) -> &FontArc {
        &self.regular
    }

    pub fn bold(&self) -> &FontArc {
        &self.bold
    }
}

impl std::fmt::Debug for CoverFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverFonts").finish_non_exhaustive()
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| {
        CoverpressError::Font(format!("failed to read {}: {}", path.display(), err))
    })
}

fn parse(data: Vec<u8>, face: &str) -> Result<FontArc> {
    FontArc::try_from_vec(data)
        .map_err(|err| CoverpressError::Font(format!("invalid {face} font: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_faces_parse_and_cover_arabic() {
        use ab_glyph::Font;
        let fonts = CoverFonts::bundled().unwrap();
        for font in [fonts.regular(), fonts.bold()] {
            // U+0628 ARABIC LETTER BEH, U+0041 LATIN CAPITAL A
            assert_ne!(font.glyph_id('\u{0628}').0, 0);
            assert_ne!(font.glyph_id('A').0, 0);
        }
    }

    #[test]
    fn resolve_without_path_uses_bundled() {
        assert!(CoverFonts::resolve(None, None).is_ok());
    }

    #[test]
    fn resolve_with_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ttf");
        assert!(matches!(
            CoverFonts::resolve(Some(&missing), None),
            Err(CoverpressError::Font(_))
        ));
    }

    #[test]
    fn garbage_font_is_rejected() {
        let result = CoverFonts::from_bytes(b"not a font".to_vec(), None);
        assert!(matches!(result, Err(CoverpressError::Font(_))));
    }

    #[test]
    fn missing_file_is_font_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CoverFonts::load(&dir.path().join("nope.ttf"), None);
        assert!(matches!(result, Err(CoverpressError::Font(_))));
    }
}
