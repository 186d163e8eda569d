use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub version: u32,

    /// Account whose repositories are shown. Compared case-insensitively.
    pub account: String,

    pub api_base_url: String,

    /// `per_page` sent with the single listing request.
    pub per_page: u32,

    /// Cards per page on the display surface.
    pub page_size: NonZeroUsize,

    /// Pause between cards revealed from the same page.
    pub reveal_delay_ms: u64,

    /// Used when a repository has no homepage images.
    pub fallback_images: Vec<String>,

    /// Swapped in by surfaces when a card image fails to load.
    pub broken_image: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            account: "thenthmichael".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            per_page: 100,
            page_size: NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN),
            reveal_delay_ms: 200,
            fallback_images: vec![
                "assets/placeholder-1.png".to_string(),
                "assets/placeholder-2.png".to_string(),
                "assets/placeholder-3.png".to_string(),
            ],
            broken_image: "assets/broken.png".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: GalleryConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            anyhow::bail!(
                "unsupported config version {} (expected {})",
                self.version,
                CONFIG_VERSION
            );
        }
        if self.account.trim().is_empty() {
            anyhow::bail!("config: account must not be empty");
        }
        if self.fallback_images.is_empty() {
            anyhow::bail!("config: fallback_images must list at least one image");
        }
        Ok(())
    }

    /// Endpoint listing the account's public repositories.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.api_base_url.trim_end_matches('/'),
            self.account,
            self.per_page
        )
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
