//! Weekly projection of two source grids.

use crate::aggregate::{CellBuilder, SlotValue, Summary};
use crate::grid::ActivityGrid;
use crate::palette::{Palette, WEEKLY_STEP};
use crate::window::CalendarWindow;

/// Condensed view: one or two cells per week, bucketed by weekly sums.
///
/// Cells carry `day: None` and a `"<sunday> - <saturday>"` date label.
pub fn summarize_weekly(
    github: &ActivityGrid,
    gitlab: &ActivityGrid,
    window: &CalendarWindow,
    palette: &Palette,
) -> Summary {
    let mut builder = CellBuilder::new(palette, WEEKLY_STEP);
    for week in 0..window.total_weeks {
        let label = window.week_label(week);
        builder.push(
            week,
            None,
            SlotValue {
                count: github.week_total(week),
                label: Some(label.clone()),
            },
            SlotValue {
                count: gitlab.week_total(week),
                label: Some(label),
            },
        );
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DayActivity;
    use crate::source::SourceKind;
    use crate::window::GridPos;
    use chrono::NaiveDate;

    fn window() -> CalendarWindow {
        CalendarWindow::ending(NaiveDate::from_ymd_opt(2024, 10, 16).unwrap())
    }

    fn fill(grid: &mut ActivityGrid, w: &CalendarWindow, week: u32, day: u32, count: u32) {
        let pos = GridPos { week, day };
        grid.insert(pos, DayActivity { count, date: w.date_at(pos) });
    }

    #[test]
    fn sums_days_before_bucketing() {
        let w = window();
        let p = Palette::default();
        let mut gh = ActivityGrid::new(w.total_weeks);
        for day in 0..7 {
            fill(&mut gh, &w, 0, day, 9);
        }
        let gl = ActivityGrid::new(w.total_weeks);
        let s = summarize_weekly(&gh, &gl, &w, &p);

        assert_eq!(s.cells.len(), w.total_weeks as usize);
        let first = &s.cells[0];
        assert_eq!(first.day, None);
        assert_eq!(first.contribs, Some(63));
        assert_eq!(first.fill, p.github[1]);
        assert_eq!(first.height, 12);
        assert_eq!(first.date.as_deref(), Some("Sun Oct 15 2023 - Sat Oct 21 2023"));
        assert_eq!(s.total_github, 63);
    }

    #[test]
    fn weekly_split_and_buckets() {
        let w = window();
        let p = Palette::default();
        let mut gh = ActivityGrid::new(w.total_weeks);
        let mut gl = ActivityGrid::new(w.total_weeks);
        fill(&mut gh, &w, 3, 1, 40);
        fill(&mut gl, &w, 3, 2, 100);
        fill(&mut gl, &w, 3, 5, 20);
        let s = summarize_weekly(&gh, &gl, &w, &p);

        let at = s.cells_at(3, None);
        assert_eq!(at.len(), 2);
        assert_eq!((at[0].kind, at[0].height, at[0].top), (SourceKind::Github, 6, 0));
        assert_eq!((at[1].kind, at[1].height, at[1].top), (SourceKind::Gitlab, 6, 6));
        assert_eq!(at[0].fill, p.github[0]);
        assert_eq!(at[1].fill, p.gitlab[2]);
        assert_eq!((s.total_github, s.total_gitlab), (40, 120));
    }

    #[test]
    fn huge_weekly_sums_are_exact() {
        let w = window();
        let p = Palette::default();
        let mut gl = ActivityGrid::new(w.total_weeks);
        for day in 0..7 {
            fill(&mut gl, &w, 2, day, 4_000_000_000);
        }
        let s = summarize_weekly(&ActivityGrid::new(w.total_weeks), &gl, &w, &p);

        let at = s.cells_at(2, None);
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].contribs, Some(28_000_000_000));
        assert_eq!(at[0].fill, p.gitlab[3]);
        assert_eq!(s.total_gitlab, 28_000_000_000);
    }

    #[test]
    fn empty_weeks_have_no_label() {
        let w = window();
        let g = ActivityGrid::new(w.total_weeks);
        let s = summarize_weekly(&g, &g, &w, &Palette::default());
        assert!(s.cells.iter().all(|c| c.kind == SourceKind::None && c.date.is_none()));
    }
}
