//! Maps source records onto a calendar window's grid.

use crate::grid::{ActivityGrid, DayActivity};
use crate::source::{ActivityRecord, ActivitySource};
use crate::window::CalendarWindow;
use crate::Result;

/// Place `records` on a fresh grid for `window`.
///
/// Records outside the window are dropped. When a date appears twice the
/// later record wins.
pub fn normalize<I>(records: I, window: &CalendarWindow) -> ActivityGrid
where
    I: IntoIterator<Item = ActivityRecord>,
{
    let mut grid = ActivityGrid::new(window.total_weeks);
    let mut dropped = 0usize;
    for record in records {
        match window.position_of(record.date) {
            Some(pos) => {
                grid.insert(
                    pos,
                    DayActivity {
                        count: record.count,
                        date: record.date,
                    },
                );
            }
            None => {
                log::trace!("dropping out-of-window record dated {}", record.date);
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        log::debug!("{} record(s) fell outside {}..{}", dropped, window.start_date, window.end_date);
    }
    grid
}

/// Parse and normalize one source's payload.
///
/// Any failure, whether fetching (`payload` is `Err`) or parsing the payload
/// as a whole, yields an empty grid. The error is logged and handed back so
/// callers can surface a notice.
pub fn normalize_payload(
    source: &dyn ActivitySource,
    payload: Result<String>,
    window: &CalendarWindow,
) -> (ActivityGrid, Option<crate::Error>) {
    let records = payload.and_then(|body| source.parse(&body));
    match records {
        Ok(records) => (normalize(records, window), None),
        Err(err) => {
            log::warn!("treating {} as having no activity: {}", source.kind(), err);
            (ActivityGrid::new(window.total_weeks), Some(err))
        }
    }
}
