//! Aggregation engine: merges two source grids into drawable cells.
//!
//! Cells come out week-major, then by day, and GitHub before GitLab at the
//! same position. Renderers draw them in that order, so GitHub always takes
//! the top half of a split cell and GitLab the bottom half.

use serde::Serialize;

use crate::grid::ActivityGrid;
use crate::palette::{Palette, DAILY_STEP};
use crate::source::SourceKind;
use crate::window::DAYS_PER_WEEK;

/// Height of an unsplit cell.
pub const FULL_HEIGHT: u32 = 12;

/// Height of each half of a split cell.
pub const HALF_HEIGHT: u32 = FULL_HEIGHT / 2;

/// One drawable rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCell {
    pub week: u32,
    /// `None` for weekly cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub fill: String,
    pub height: u32,
    pub top: u32,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Ordered cells plus per-source totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cells: Vec<ActivityCell>,
    pub total_github: u64,
    pub total_gitlab: u64,
}

impl Summary {
    /// Cells drawn at a position, in emission order.
    pub fn cells_at(&self, week: u32, day: Option<u32>) -> Vec<&ActivityCell> {
        self.cells
            .iter()
            .filter(|c| c.week == week && c.day == day)
            .collect()
    }

    pub fn total(&self, kind: SourceKind) -> u64 {
        match kind {
            SourceKind::Github => self.total_github,
            SourceKind::Gitlab => self.total_gitlab,
            SourceKind::None => 0,
        }
    }
}

/// One source's value at a position, with its tooltip date label.
pub(crate) struct SlotValue {
    pub count: u64,
    pub label: Option<String>,
}

impl SlotValue {
    pub(crate) fn empty() -> Self {
        SlotValue { count: 0, label: None }
    }
}

/// Shared stacking rules for one grid position.
pub(crate) struct CellBuilder<'p> {
    palette: &'p Palette,
    step: u32,
    summary: Summary,
}

impl<'p> CellBuilder<'p> {
    pub(crate) fn new(palette: &'p Palette, step: u32) -> Self {
        Self {
            palette,
            step,
            summary: Summary::default(),
        }
    }

    pub(crate) fn push(&mut self, week: u32, day: Option<u32>, github: SlotValue, gitlab: SlotValue) {
        let has_github = github.count > 0;
        let has_gitlab = gitlab.count > 0;
        let height = if has_github && has_gitlab { HALF_HEIGHT } else { FULL_HEIGHT };

        if has_github {
            self.summary.total_github += github.count;
            self.summary.cells.push(ActivityCell {
                week,
                day,
                fill: self.palette.fill(SourceKind::Github, github.count, self.step).to_string(),
                height,
                top: 0,
                kind: SourceKind::Github,
                contribs: Some(github.count),
                date: github.label,
            });
        }

        if has_gitlab {
            self.summary.total_gitlab += gitlab.count;
            self.summary.cells.push(ActivityCell {
                week,
                day,
                fill: self.palette.fill(SourceKind::Gitlab, gitlab.count, self.step).to_string(),
                height,
                top: if has_github { HALF_HEIGHT } else { 0 },
                kind: SourceKind::Gitlab,
                contribs: Some(gitlab.count),
                date: gitlab.label,
            });
        }

        if !has_github && !has_gitlab {
            self.summary.cells.push(ActivityCell {
                week,
                day,
                fill: self.palette.empty.clone(),
                height: FULL_HEIGHT,
                top: 0,
                kind: SourceKind::None,
                contribs: None,
                date: None,
            });
        }
    }

    pub(crate) fn finish(self) -> Summary {
        self.summary
    }
}

fn slot(grid: &ActivityGrid, week: u32, day: u32) -> SlotValue {
    match grid.get(week, day) {
        Some(a) => SlotValue {
            count: u64::from(a.count),
            label: Some(a.label()),
        },
        None => SlotValue::empty(),
    }
}

/// Daily view: one or two cells for every (week, day) in `0..total_weeks`.
pub fn aggregate(
    github: &ActivityGrid,
    gitlab: &ActivityGrid,
    total_weeks: u32,
    palette: &Palette,
) -> Summary {
    let mut builder = CellBuilder::new(palette, DAILY_STEP);
    for week in 0..total_weeks {
        for day in 0..DAYS_PER_WEEK {
            builder.push(week, Some(day), slot(github, week, day), slot(gitlab, week, day));
        }
    }
    builder.finish()
}
