use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TimelineError, TimelineResult};

/// One statistic in the stats row.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatEntry {
    /// Displayed figure, e.g. `"95%"`.
    pub value: String,
    /// Caption under the figure.
    pub label: String,
    /// Accent colour token for the figure.
    pub accent: String,
}

impl StatEntry {
    fn new(value: &str, label: &str, accent: &str) -> Self {
        Self {
            value: value.to_owned(),
            label: label.to_owned(),
            accent: accent.to_owned(),
        }
    }
}

/// The hero image asset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeroImageConfig {
    /// File name under the asset prefix.
    pub file: String,
    /// Declared intrinsic width in pixels.
    pub width: u32,
    /// Declared intrinsic height in pixels.
    pub height: u32,
    /// Alternative text.
    pub alt: String,
}

/// Copy for the sections after the pinned hero.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentCopy {
    /// Heading of the follow-up section.
    pub title: String,
    /// Paragraph under the heading.
    pub body: String,
    /// Text in the closing band.
    pub footer: String,
}

/// Static page configuration.
///
/// Everything has a default matching the shipped page; a JSON file only needs to list the
/// fields it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Headline word groups, animated one after another.
    pub headline: Vec<String>,
    /// Statistics row.
    pub stats: Vec<StatEntry>,
    /// Hero image.
    pub hero_image: HeroImageConfig,
    /// Follow-up copy.
    pub content: ContentCopy,
    /// Path the page is served under.
    pub base_path: String,
    /// Prefix for static assets.
    pub asset_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            headline: vec![
                "W E L C O M E".to_owned(),
                "I T Z".to_owned(),
                "F I Z Z".to_owned(),
            ],
            stats: vec![
                StatEntry::new("95%", "Efficiency", "blue-400"),
                StatEntry::new("0.2s", "Response", "purple-400"),
                StatEntry::new("120+", "Features", "teal-400"),
            ],
            hero_image: HeroImageConfig {
                file: "car.jpg".to_owned(),
                width: 1600,
                height: 1000,
                alt: "Premium Sports Car".to_owned(),
            },
            content: ContentCopy {
                title: "Precision In Motion".to_owned(),
                body: "By tying transformations directly to scroll progress rather than time, \
                       we create interactions that feel completely natural. The motion conforms \
                       exactly to the user's velocity."
                    .to_owned(),
                footer: "End of scroll demonstration".to_owned(),
            },
            base_path: "/Scroll_Animation".to_owned(),
            asset_prefix: "/Scroll_Animation/".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> TimelineResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TimelineError::config(format!("parse page config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> TimelineResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Parse from a JSON file on disk and validate.
    pub fn from_path(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TimelineError::config(format!("open page config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the invariants the layout and motion rely on.
    pub fn validate(&self) -> TimelineResult<()> {
        if self.headline.is_empty() || self.headline.iter().any(|w| w.trim().is_empty()) {
            return Err(TimelineError::validation(
                "headline must contain at least one non-empty word group",
            ));
        }
        if self.stats.is_empty() {
            return Err(TimelineError::validation("stats must not be empty"));
        }
        for stat in &self.stats {
            if stat.value.trim().is_empty() || stat.label.trim().is_empty() {
                return Err(TimelineError::validation(
                    "stat value and label must be non-empty",
                ));
            }
        }
        if self.hero_image.file.trim().is_empty() {
            return Err(TimelineError::validation("hero_image.file must be non-empty"));
        }
        if self.hero_image.width == 0 || self.hero_image.height == 0 {
            return Err(TimelineError::validation(
                "hero_image width/height must be > 0",
            ));
        }
        for (field, value) in [
            ("base_path", &self.base_path),
            ("asset_prefix", &self.asset_prefix),
        ] {
            if !value.is_empty() && !value.starts_with('/') {
                return Err(TimelineError::validation(format!(
                    "{field} must be empty or start with '/'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
