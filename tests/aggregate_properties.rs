//! Property tests for the aggregation engine and weekly projection

use chrono::NaiveDate;
use devchart::{aggregate, summarize_weekly, ActivityGrid, CalendarWindow, DayActivity, GridPos, Palette, SourceKind};
use proptest::prelude::*;

fn build_grid(weeks: u32, counts: &[u32]) -> ActivityGrid {
    let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let mut grid = ActivityGrid::new(weeks);
    for (i, &count) in counts.iter().enumerate().take(weeks as usize * 7) {
        if count > 0 {
            let i = i as u32;
            grid.insert(GridPos { week: i / 7, day: i % 7 }, DayActivity { count, date });
        }
    }
    grid
}

// Mostly-sparse daily counts, like real calendars.
fn counts(len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(prop_oneof![3 => Just(0u32), 2 => 0u32..60], len)
}

fn grids() -> impl Strategy<Value = (u32, Vec<u32>, Vec<u32>)> {
    (0u32..8).prop_flat_map(|weeks| {
        let len = weeks as usize * 7;
        (Just(weeks), counts(len), counts(len))
    })
}

proptest! {
    #[test]
    fn every_position_has_one_or_two_cells((weeks, gh, gl) in grids()) {
        let s = aggregate(&build_grid(weeks, &gh), &build_grid(weeks, &gl), weeks, &Palette::default());
        for week in 0..weeks {
            for day in 0..7 {
                let at = s.cells_at(week, Some(day));
                prop_assert!(!at.is_empty() && at.len() <= 2);
                prop_assert_eq!(at.iter().map(|c| c.height).sum::<u32>(), 12);
            }
        }
        let positions: std::collections::HashSet<_> = s.cells.iter().map(|c| (c.week, c.day)).collect();
        prop_assert_eq!(positions.len(), weeks as usize * 7);
    }

    #[test]
    fn stacking_follows_counts((weeks, gh, gl) in grids()) {
        let s = aggregate(&build_grid(weeks, &gh), &build_grid(weeks, &gl), weeks, &Palette::default());
        for (i, (&a, &b)) in gh.iter().zip(gl.iter()).enumerate() {
            let i = i as u32;
            let at = s.cells_at(i / 7, Some(i % 7));
            match (a > 0, b > 0) {
                (true, true) => {
                    prop_assert_eq!(at.len(), 2);
                    prop_assert_eq!((at[0].kind, at[0].top, at[0].height), (SourceKind::Github, 0, 6));
                    prop_assert_eq!((at[1].kind, at[1].top, at[1].height), (SourceKind::Gitlab, 6, 6));
                }
                (false, false) => {
                    prop_assert_eq!(at.len(), 1);
                    prop_assert_eq!((at[0].kind, at[0].height), (SourceKind::None, 12));
                }
                _ => {
                    prop_assert_eq!(at.len(), 1);
                    prop_assert_eq!((at[0].top, at[0].height), (0, 12));
                }
            }
        }
    }

    #[test]
    fn totals_match_inputs_and_rerun_is_identical((weeks, gh, gl) in grids()) {
        let (g1, g2) = (build_grid(weeks, &gh), build_grid(weeks, &gl));
        let palette = Palette::default();
        let first = aggregate(&g1, &g2, weeks, &palette);
        let second = aggregate(&g1, &g2, weeks, &palette);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_github, gh.iter().map(|&c| c as u64).sum::<u64>());
        prop_assert_eq!(first.total_gitlab, gl.iter().map(|&c| c as u64).sum::<u64>());
        let emitted: u64 = first
            .cells
            .iter()
            .filter(|c| c.kind == SourceKind::Github)
            .filter_map(|c| c.contribs)
            .map(u64::from)
            .sum();
        prop_assert_eq!(emitted, first.total_github);
    }

    #[test]
    fn daily_fill_is_bucketed_by_tens(count in 1u32..200) {
        let mut grid = ActivityGrid::new(1);
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        grid.insert(GridPos { week: 0, day: 0 }, DayActivity { count, date });
        let palette = Palette::default();
        let s = aggregate(&grid, &ActivityGrid::new(1), 1, &palette);
        let expected = &palette.github[(count / 10).min(3) as usize];
        prop_assert_eq!(&s.cells[0].fill, expected);
    }

    #[test]
    fn weekly_totals_equal_daily_totals((weeks, gh, gl) in grids()) {
        let window = CalendarWindow {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap() + chrono::Duration::weeks(weeks as i64),
            total_weeks: weeks,
        };
        let (g1, g2) = (build_grid(weeks, &gh), build_grid(weeks, &gl));
        let palette = Palette::default();
        let daily = aggregate(&g1, &g2, weeks, &palette);
        let weekly = summarize_weekly(&g1, &g2, &window, &palette);
        prop_assert_eq!(daily.total_github, weekly.total_github);
        prop_assert_eq!(daily.total_gitlab, weekly.total_gitlab);
        for week in 0..weeks {
            let at = weekly.cells_at(week, None);
            prop_assert!(!at.is_empty() && at.len() <= 2);
        }
    }
}

#[test]
fn scenario_single_github_day() {
    let gh = build_grid(1, &[5]);
    let s = aggregate(&gh, &ActivityGrid::new(1), 1, &Palette::default());
    assert_eq!(s.cells.len(), 7);
    assert_eq!(s.cells[0].kind, SourceKind::Github);
    assert_eq!((s.cells[0].height, s.cells[0].top), (12, 0));
    assert_eq!(s.cells[0].fill, Palette::default().github[0]);
    assert_eq!(s.cells.iter().filter(|c| c.kind == SourceKind::None).count(), 6);
    assert_eq!((s.total_github, s.total_gitlab), (5, 0));
}

#[test]
fn scenario_split_day() {
    let s = aggregate(&build_grid(1, &[12]), &build_grid(1, &[3]), 1, &Palette::default());
    assert_eq!(s.cells.len(), 8);
    assert_eq!((s.cells[0].height, s.cells[0].top), (6, 0));
    assert_eq!((s.cells[1].height, s.cells[1].top), (6, 6));
    assert_eq!((s.total_github, s.total_gitlab), (12, 3));
}

#[test]
fn scenario_all_empty() {
    let s = aggregate(&ActivityGrid::new(5), &ActivityGrid::new(5), 5, &Palette::default());
    assert_eq!(s.cells.len(), 35);
    assert!(s.cells.iter().all(|c| c.kind == SourceKind::None));
    assert_eq!((s.total_github, s.total_gitlab), (0, 0));
}
