//! Static asset paths and the hero image.
//!
//! The page references a single image. It is resolved once against the configured asset prefix;
//! when the file cannot be read the page keeps rendering and the host shows its broken-image
//! state instead.

use std::path::{Path, PathBuf};

use crate::page::config::PageConfig;

/// Join `prefix` and `rest` with exactly one `/` between them.
fn join(prefix: &str, rest: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        return if prefix.is_empty() {
            "/".to_owned()
        } else {
            prefix.to_owned()
        };
    }
    format!("{prefix}/{rest}")
}

/// Public URL of a static asset.
pub fn asset_url(config: &PageConfig, file: &str) -> String {
    join(&config.asset_prefix, file)
}

/// Public URL of a route under the page's base path.
pub fn page_url(config: &PageConfig, route: &str) -> String {
    join(&config.base_path, route)
}

/// Load outcome of the hero image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ImageState {
    /// Decoded header; intrinsic size in pixels.
    Loaded {
        /// Intrinsic width.
        width: u32,
        /// Intrinsic height.
        height: u32,
    },
    /// Missing or undecodable; rendered as the host's broken-image fallback.
    Broken,
}

/// The hero image as the page sees it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroImage {
    /// Public URL.
    pub url: String,
    /// File on disk that was inspected.
    pub path: PathBuf,
    /// Alternative text.
    pub alt: String,
    /// Inspection result.
    pub state: ImageState,
}

impl HeroImage {
    /// Inspect the configured hero image under `root` (the directory serving the asset prefix).
    ///
    /// Never fails: an unreadable file yields [`ImageState::Broken`].
    #[tracing::instrument(skip(config))]
    pub fn inspect(root: &Path, config: &PageConfig) -> Self {
        let image = &config.hero_image;
        let path = root.join(&image.file);
        let state = match image::image_dimensions(&path) {
            Ok((width, height)) => {
                if (width, height) != (image.width, image.height) {
                    tracing::debug!(
                        width,
                        height,
                        declared_width = image.width,
                        declared_height = image.height,
                        "hero image size differs from declared size"
                    );
                }
                ImageState::Loaded { width, height }
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    %err,
                    "hero image unavailable, rendering broken state"
                );
                ImageState::Broken
            }
        };
        Self {
            url: asset_url(config, &image.file),
            path,
            alt: image.alt.clone(),
            state,
        }
    }

    /// Height over width, from the inspected size or else the declared one.
    pub fn aspect(&self, config: &PageConfig) -> f64 {
        match self.state {
            ImageState::Loaded { width, height } if width > 0 => {
                f64::from(height) / f64::from(width)
            }
            _ => f64::from(config.hero_image.height) / f64::from(config.hero_image.width),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/assets.rs"]
mod tests;
