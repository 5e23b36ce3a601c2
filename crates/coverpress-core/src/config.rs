// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoverpressError, Result};

/// Literal texts drawn on the cover page and used in file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverText {
    /// Top heading.
    pub heading: String,
    /// Institution name, below the logo.
    pub institution: String,
    /// Term line, drawn in red.
    pub term: String,
    pub academic_year: String,
    pub student_name_label: String,
    pub subject_name_label: String,
    pub instructor_name_label: String,
    pub student_id_label: String,
    pub subject_code_label: String,
    pub section_number_label: String,
    /// First word(s) of the stored file name.
    pub file_name_prefix: String,
    /// Word placed before the student name in the stored file name.
    pub file_name_student_label: String,
}

impl Default for CoverText {
    fn default() -> Self {
        Self {
            heading: "بسم الله الرحمن الرحيم".into(),
            institution: "جامعة القدس المفتوحة".into(),
            term: "حل النشاط للفصل الدراسي الثاني 1242".into(),
            academic_year: "2024/2025".into(),
            student_name_label: "اسم الطالب: ".into(),
            subject_name_label: "اسم المقرر: ".into(),
            instructor_name_label: "عضو هيئة التدريس: ".into(),
            student_id_label: "الرقم الجامعي: ".into(),
            subject_code_label: "رقم المقرر: ".into(),
            section_number_label: "رقم الشعبة: ".into(),
            file_name_prefix: "حل نشاط".into(),
            file_name_student_label: "الطالب".into(),
        }
    }
}

/// Settings for the cover renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Logo drawn under the heading. `None` disables the fetch.
    pub logo_url: Option<String>,
    /// Watermark drawn near the bottom. `None` disables the fetch.
    pub watermark_url: Option<String>,
    /// Alpha multiplier applied to the watermark, 0.0 (invisible) to 1.0.
    pub watermark_opacity: f32,
    /// Upper bound for a single overlay fetch.
    pub fetch_timeout_secs: u64,
    /// Responses larger than this are rejected.
    pub max_overlay_bytes: u64,
    /// TrueType/OpenType file replacing the bundled regular face.
    pub font_path: Option<PathBuf>,
    /// Bold face for headings and metadata rows. Only read together with
    /// `font_path`; falls back to it when unset.
    pub bold_font_path: Option<PathBuf>,
    pub text: CoverText,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            logo_url: Some("https://www.zamayl.com/assets/img/site/qouLogoNew.png".into()),
            watermark_url: Some(
                "https://www.zamayl.com/assets/img/site/zamayl-task-service-logo.png".into(),
            ),
            // The deployed service composited at full opacity.
            watermark_opacity: 1.0,
            fetch_timeout_secs: 5,
            max_overlay_bytes: 8 * 1024 * 1024,
            font_path: None,
            bold_font_path: None,
            text: CoverText::default(),
        }
    }
}

impl CoverConfig {
    /// Opacity clamped into `0.0..=1.0`; NaN counts as fully opaque.
    pub fn effective_opacity(&self) -> f32 {
        if self.watermark_opacity.is_nan() {
            1.0
        } else {
            self.watermark_opacity.clamp(0.0, 1.0)
        }
    }
}

/// Where finished documents are stored and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Container directory; created on first store.
    pub root: PathBuf,
    /// Prefix of the returned reference, e.g. `https://files.example.org/tasks`.
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("coverpress-documents"),
            public_base_url: "file://coverpress-documents".into(),
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cover: CoverConfig,
    pub storage: StorageConfig,
}

/// Environment variable overriding [`StorageConfig::root`].
pub const ENV_STORAGE_ROOT: &str = "COVERPRESS_STORAGE_ROOT";
/// Environment variable overriding [`StorageConfig::public_base_url`].
pub const ENV_PUBLIC_BASE_URL: &str = "COVERPRESS_PUBLIC_BASE_URL";

impl AppConfig {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CoverpressError::Config(format!("failed to read {}: {}", path.display(), err))
        })?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Apply storage overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok());
        self
    }

    /// Apply storage overrides from any key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root) = lookup(ENV_STORAGE_ROOT).filter(|v| !v.is_empty()) {
            self.storage.root = PathBuf::from(root);
        }
        if let Some(url) = lookup(ENV_PUBLIC_BASE_URL).filter(|v| !v.is_empty()) {
            self.storage.public_base_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cover.fetch_timeout_secs == 0 {
            return Err(CoverpressError::Config(
                "cover.fetch_timeout_secs must be at least 1".into(),
            ));
        }
        if self.storage.public_base_url.trim().is_empty() {
            return Err(CoverpressError::Config(
                "storage.public_base_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "cover": { "watermark_opacity": 0.2 } }"#).unwrap();
        assert_eq!(config.cover.watermark_opacity, 0.2);
        assert_eq!(config.cover.fetch_timeout_secs, 5);
        assert_eq!(config.cover.text, CoverText::default());
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn opacity_is_clamped() {
        let mut cover = CoverConfig::default();
        assert_eq!(cover.effective_opacity(), 1.0);
        cover.watermark_opacity = 1.7;
        assert_eq!(cover.effective_opacity(), 1.0);
        cover.watermark_opacity = -0.5;
        assert_eq!(cover.effective_opacity(), 0.0);
        cover.watermark_opacity = f32::NAN;
        assert_eq!(cover.effective_opacity(), 1.0);
    }

    #[test]
    fn overrides_replace_storage_settings() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            ENV_STORAGE_ROOT => Some("/srv/tasks".into()),
            ENV_PUBLIC_BASE_URL => Some("https://files.example.org/tasks".into()),
            _ => None,
        });
        assert_eq!(config.storage.root, PathBuf::from("/srv/tasks"));
        assert_eq!(config.storage.public_base_url, "https://files.example.org/tasks");
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.cover.fetch_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(CoverpressError::Config(_))));
    }
}
