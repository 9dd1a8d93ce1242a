use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::DEFAULT_FONT_PATH;
use crate::error::Result;
use crate::palette::FontFamily;

/// Rendering configuration, read from an optional TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// Font file used when the selected family has no entry in `font_families`.
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
    /// Font file per family name, e.g. `"Times New Roman" = "/usr/share/fonts/times.ttf"`.
    #[serde(default)]
    pub font_families: BTreeMap<String, PathBuf>,
}

fn default_font_path() -> PathBuf {
    PathBuf::from(DEFAULT_FONT_PATH)
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            font_families: BTreeMap::new(),
        }
    }
}

impl WatermarkConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Font files to try for `family`, most specific first.
    pub fn font_candidates(&self, family: FontFamily) -> Vec<&Path> {
        let mut candidates = Vec::with_capacity(2);
        if let Some(path) = self
            .font_families
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(family.name()))
            .map(|(_, path)| path)
        {
            candidates.push(path.as_path());
        }
        candidates.push(self.font_path.as_path());
        candidates
    }
}
