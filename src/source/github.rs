//! GitHub contributions page parser.
//!
//! The page served at `/users/<name>/contributions` renders the calendar as a
//! table of `<td data-date=… id="contribution-day-component-<day>-<week>">`
//! cells. The count is not on the cell itself but in a sibling
//! `<tool-tip for="<cell id>">3 contributions on …</tool-tip>`. Older markup
//! carried a `data-count` attribute directly on the cell; both are accepted.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use super::{parse_date, ActivityRecord, ActivitySource, SourceKind};
use crate::{Error, Result};

const NAME: &str = "GitHub";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::parse(NAME, format!("bad selector {}: {:?}", css, e)))
}

/// Leading count of a tooltip such as `"1,024 contributions on May 3rd."`.
///
/// `"No contributions …"` reads as zero; anything else is unparseable.
fn parse_tooltip_count(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.starts_with("No ") {
        return Some(0);
    }
    let digits: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    digits.parse().ok()
}

/// Parser for the GitHub contributions calendar markup.
#[derive(Debug, Default, Clone)]
pub struct GithubSource;

impl GithubSource {
    pub fn new() -> Self {
        GithubSource
    }

    fn day_cells<'a>(&self, document: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        let table_sel = selector("table.ContributionCalendar-grid")?;
        let day_sel = selector(r#"td[data-date][id^="contribution-day-component-"]"#)?;

        // Prefer the calendar table; fall back to the whole page.
        let cells: Vec<_> = match document.select(&table_sel).next() {
            Some(table) => table.select(&day_sel).collect(),
            None => document.select(&day_sel).collect(),
        };
        if !cells.is_empty() {
            return Ok(cells);
        }

        let legacy_sel = selector("[data-date][data-count]")?;
        Ok(document.select(&legacy_sel).collect())
    }
}

impl ActivitySource for GithubSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Github
    }

    fn parse(&self, payload: &str) -> Result<Vec<ActivityRecord>> {
        let document = Html::parse_document(payload);
        let cells = self.day_cells(&document)?;
        if cells.is_empty() {
            return Err(Error::parse(NAME, "no contribution calendar found in page"));
        }

        let tip_sel = selector("tool-tip[for]")?;
        let tooltips: HashMap<&str, Option<u32>> = document
            .select(&tip_sel)
            .filter_map(|tip| {
                let id = tip.value().attr("for")?;
                Some((id, parse_tooltip_count(&tip.text().collect::<String>())))
            })
            .collect();

        let mut records = Vec::with_capacity(cells.len());
        for cell in cells {
            let el = cell.value();
            let Some(date) = el.attr("data-date").and_then(parse_date) else {
                log::debug!("{}: skipping cell with bad date {:?}", NAME, el.attr("data-date"));
                continue;
            };

            let count = match el.attr("data-count") {
                Some(raw) => raw.trim().parse::<u32>().ok(),
                None => el
                    .attr("id")
                    .and_then(|id| tooltips.get(id).copied())
                    .flatten(),
            };
            let Some(count) = count else {
                log::debug!("{}: no readable count for {}", NAME, date);
                continue;
            };

            records.push(ActivityRecord { date, count });
        }

        Ok(records)
    }
}
