//! Dense per-source activity grid.

use chrono::NaiveDate;

use crate::window::{date_label, GridPos, DAYS_PER_WEEK};

/// One day's activity for a single source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub count: u32,
    pub date: NaiveDate,
}

impl DayActivity {
    pub fn label(&self) -> String {
        date_label(self.date)
    }
}

/// A `total_weeks × 7` array of optional day entries.
///
/// An empty slot means zero activity for that day. Writes outside the grid
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGrid {
    total_weeks: u32,
    slots: Vec<Option<DayActivity>>,
}

impl ActivityGrid {
    pub fn new(total_weeks: u32) -> Self {
        Self {
            total_weeks,
            slots: vec![None; total_weeks as usize * DAYS_PER_WEEK as usize],
        }
    }

    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.week < self.total_weeks && pos.day < DAYS_PER_WEEK {
            Some((pos.week * DAYS_PER_WEEK + pos.day) as usize)
        } else {
            None
        }
    }

    /// Store `entry` at `pos`, replacing any previous entry.
    ///
    /// Returns `false` when `pos` lies outside the grid.
    pub fn insert(&mut self, pos: GridPos, entry: DayActivity) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.slots[i] = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, week: u32, day: u32) -> Option<&DayActivity> {
        self.index(GridPos { week, day })
            .and_then(|i| self.slots[i].as_ref())
    }

    /// Activity count at a position; empty slots count as zero.
    pub fn count(&self, week: u32, day: u32) -> u32 {
        self.get(week, day).map(|a| a.count).unwrap_or(0)
    }

    /// Sum of the seven days of `week`.
    pub fn week_total(&self, week: u32) -> u64 {
        (0..DAYS_PER_WEEK).map(|day| u64::from(self.count(week, day))).sum()
    }

    /// Sum over the whole grid.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, a)| u64::from(a.count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.map_or(true, |a| a.count == 0))
    }

    /// Occupied slots in (week, day) order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &DayActivity)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref().map(|a| {
                let i = i as u32;
                (
                    GridPos {
                        week: i / DAYS_PER_WEEK,
                        day: i % DAYS_PER_WEEK,
                    },
                    a,
                )
            })
        })
    }
}
