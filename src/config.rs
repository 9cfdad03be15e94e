//! Chart configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::source::SourceKind;
use crate::{Error, Result};

/// Placeholder replaced by the username in source URL templates.
pub const USER_PLACEHOLDER: &str = "{user}";

/// Configuration for fetching and rendering a chart
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
///
/// # Examples
///
/// ```
/// let cfg = devchart::ChartConfig::default();
/// assert!(cfg.github_url.contains("{user}"));
/// assert_eq!(cfg.timeout_ms, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// User agent string to send with requests
    pub user_agent: String,
    /// Extra HTTP headers
    pub headers: HashMap<String, String>,
    /// Request timeout in milliseconds (0 => no timeout)
    pub timeout_ms: u64,
    /// GitHub contributions page, with a `{user}` placeholder
    pub github_url: String,
    /// GitLab calendar endpoint, with a `{user}` placeholder
    pub gitlab_url: String,
    /// Cell and legend colors
    pub palette: Palette,
    /// Target width of PNG output in pixels
    pub png_width: u32,
    /// Optional attribution text drawn in the bottom-right corner
    pub footer: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("devchart/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: HashMap::new(),
            timeout_ms: 0,
            github_url: "https://github.com/users/{user}/contributions".to_string(),
            gitlab_url: "https://gitlab.com/users/{user}/calendar.json".to_string(),
            palette: Palette::default(),
            png_width: 1600,
            footer: None,
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let cfg: ChartConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, template) in [("github_url", &self.github_url), ("gitlab_url", &self.gitlab_url)] {
            if !template.contains(USER_PLACEHOLDER) {
                return Err(Error::ConfigError(format!(
                    "{} must contain {}",
                    name, USER_PLACEHOLDER
                )));
            }
        }
        if self.png_width == 0 {
            return Err(Error::ConfigError("png_width must be positive".into()));
        }
        Ok(())
    }

    /// URL template for a source.
    pub fn template(&self, kind: SourceKind) -> Option<&str> {
        match kind {
            SourceKind::Github => Some(&self.github_url),
            SourceKind::Gitlab => Some(&self.gitlab_url),
            SourceKind::None => None,
        }
    }
}
