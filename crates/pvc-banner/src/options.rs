use crate::font::{DEFAULT_CUSTOM_FONT, DEFAULT_SYSTEM_FONT, FontChain};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User-facing banner configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BannerOptions {
    /// Raw text; `\n` separates lines
    pub text: String,
    pub output: PathBuf,

    // Page size
    pub width_mm: f64,
    pub height_mm: f64,

    pub font_size_mm: f64,

    // Colors, by name
    pub foreground: String,
    pub background: String,

    pub center_text: bool,

    // Font fallback chain
    pub font_path: PathBuf,
    pub system_font_path: PathBuf,
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self {
            text: "Banner PVC".to_string(),
            output: PathBuf::from("banner.pdf"),
            width_mm: 1000.0,
            height_mm: 700.0,
            font_size_mm: 25.0,
            foreground: "black".to_string(),
            background: "yellow".to_string(),
            center_text: true,
            font_path: PathBuf::from(DEFAULT_CUSTOM_FONT),
            system_font_path: PathBuf::from(DEFAULT_SYSTEM_FONT),
        }
    }
}

impl BannerOptions {
    /// Load options from JSON file. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BannerError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BannerError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The immutable layout input for these options
    pub fn to_spec(&self) -> BannerSpec {
        BannerSpec::new(
            self.width_mm,
            self.height_mm,
            self.font_size_mm,
            &self.text,
            self.center_text,
            self.foreground.clone(),
            self.background.clone(),
        )
    }

    pub fn font_chain(&self) -> FontChain {
        FontChain::new(&self.font_path, &self.system_font_path)
    }
}
