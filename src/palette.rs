//! Color ramps and count bucketing.

use serde::{Deserialize, Serialize};

use crate::SourceKind;

/// Number of color steps per source.
pub const BUCKETS: usize = 4;

/// Bucket width for single-day counts.
pub const DAILY_STEP: u32 = 10;

/// Bucket width for whole-week sums.
pub const WEEKLY_STEP: u32 = 50;

/// Quantize `value` into a ramp index: `min(3, value / step)`.
pub fn bucket(value: u64, step: u32) -> usize {
    let step = u64::from(step.max(1));
    (value / step).min(BUCKETS as u64 - 1) as usize
}

/// Range labels for each bucket, e.g. `1-9`, `10-19`, `20-29`, `30+`.
pub fn legend_labels(step: u32) -> [String; BUCKETS] {
    std::array::from_fn(|i| {
        let low = if i == 0 { 1 } else { i as u32 * step };
        if i == BUCKETS - 1 {
            format!("{}+", low)
        } else {
            format!("{}-{}", low, (i as u32 + 1) * step - 1)
        }
    })
}

/// Per-source light-to-dark ramps plus the fill used for empty days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub github: [String; BUCKETS],
    pub gitlab: [String; BUCKETS],
    pub empty: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            github: ["#9be9a8", "#40c463", "#30a14e", "#216e39"].map(String::from),
            gitlab: ["#fed7aa", "#fb923c", "#ea580c", "#9a3412"].map(String::from),
            empty: "#d1d5db".to_string(),
        }
    }
}

impl Palette {
    /// The ramp for a source; `None` maps to a flat ramp of the empty fill.
    pub fn ramp(&self, kind: SourceKind) -> [&str; BUCKETS] {
        match kind {
            SourceKind::Github => self.github.each_ref().map(String::as_str),
            SourceKind::Gitlab => self.gitlab.each_ref().map(String::as_str),
            SourceKind::None => [self.empty.as_str(); BUCKETS],
        }
    }

    /// Fill for `value` from `kind`'s ramp, bucketed by `step`.
    pub fn fill(&self, kind: SourceKind, value: u64, step: u32) -> &str {
        self.ramp(kind)[bucket(value, step)]
    }

    /// The darkest step of a ramp, used for source icons.
    pub fn accent(&self, kind: SourceKind) -> &str {
        self.ramp(kind)[BUCKETS - 1]
    }
}
