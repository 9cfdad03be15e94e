//! devchart
//!
//! Merges the GitHub and GitLab contribution calendars of a developer into a
//! single calendar grid and renders it as SVG or PNG.
//!
//! # Pipeline
//!
//! - **Window**: the week-aligned year ending today ([`CalendarWindow`])
//! - **Sources**: payload parsers behind [`ActivitySource`]; GitHub's
//!   contributions page and GitLab's `calendar.json`
//! - **Normalization**: records onto a dense `weeks × 7` [`ActivityGrid`],
//!   degrading any failure to "no activity"
//! - **Aggregation**: ordered, stacked, color-bucketed cells plus totals,
//!   per day ([`aggregate`]) or per week ([`summarize_weekly`])
//! - **Rendering**: SVG text, rasterized to PNG with the `png` feature
//!
//! # Example
//!
//! ```no_run
//! use devchart::{ChartConfig, Generator, View};
//!
//! # async fn run() -> devchart::Result<()> {
//! let config = ChartConfig::default();
//! let generator = Generator::new(config.clone())?;
//! let chart = generator.generate(Some("octocat"), Some("octocat")).await;
//! let svg = chart.to_svg(View::Daily, &config);
//! std::fs::write("chart.svg", svg)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod fetch;
pub mod grid;
pub mod normalize;
pub mod palette;
pub mod rendering;
pub mod source;
pub mod summary;
pub mod window;

pub use aggregate::{aggregate, ActivityCell, Summary};
pub use chart::{Chart, Generator, SourceInput, View};
pub use config::ChartConfig;
pub use grid::{ActivityGrid, DayActivity};
pub use normalize::{normalize, normalize_payload};
pub use palette::Palette;
pub use source::{ActivityRecord, ActivitySource, SourceKind};
pub use summary::summarize_weekly;
pub use window::{CalendarWindow, GridPos};
