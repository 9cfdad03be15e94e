//! Activity sources: payload parsers behind a narrow trait.
//!
//! Each source turns its raw payload into a flat list of [`ActivityRecord`]s.
//! Nothing downstream depends on the markup or JSON shape; adding a source
//! means implementing [`ActivitySource`] only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Result;

pub mod github;
pub mod gitlab;

pub use github::GithubSource;
pub use gitlab::GitlabSource;

/// Where a cell's activity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Github,
    Gitlab,
    /// No activity from either source.
    None,
}

impl SourceKind {
    /// Human-readable platform name.
    pub fn display_name(self) -> &'static str {
        match self {
            SourceKind::Github => "GitHub",
            SourceKind::Gitlab => "GitLab",
            SourceKind::None => "none",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single (date, count) observation from one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// A parser for one platform's activity payload.
///
/// Implementations must skip individual malformed entries and only return an
/// error when the payload as a whole has the wrong shape.
pub trait ActivitySource: Send + Sync {
    /// Which platform this source reads.
    fn kind(&self) -> SourceKind;

    /// Extract activity records from a raw payload.
    fn parse(&self, payload: &str) -> Result<Vec<ActivityRecord>>;
}

/// The parser for a platform.
///
/// Returns `None` for [`SourceKind::None`].
pub fn source_for(kind: SourceKind) -> Option<Box<dyn ActivitySource>> {
    match kind {
        SourceKind::Github => Some(Box::new(GithubSource::new())),
        SourceKind::Gitlab => Some(Box::new(GitlabSource::new())),
        SourceKind::None => None,
    }
}

/// Parse an ISO-ish date (`2024-01-07`, optionally followed by a time part).
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}
