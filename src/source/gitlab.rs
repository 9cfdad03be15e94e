//! GitLab `calendar.json` parser: a flat `{"YYYY-MM-DD": count}` object.

use serde_json::Value;

use super::{parse_date, ActivityRecord, ActivitySource, SourceKind};
use crate::{Error, Result};

const NAME: &str = "GitLab";

/// Parser for the GitLab user calendar endpoint.
#[derive(Debug, Default, Clone)]
pub struct GitlabSource;

impl GitlabSource {
    pub fn new() -> Self {
        GitlabSource
    }
}

fn parse_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|c| u32::try_from(c).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl ActivitySource for GitlabSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Gitlab
    }

    fn parse(&self, payload: &str) -> Result<Vec<ActivityRecord>> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| Error::parse(NAME, format!("invalid JSON: {}", e)))?;
        let entries = value
            .as_object()
            .ok_or_else(|| Error::parse(NAME, "expected a JSON object of date counts"))?;

        let mut records = Vec::with_capacity(entries.len());
        for (raw_date, raw_count) in entries {
            let Some(date) = parse_date(raw_date) else {
                log::debug!("{}: skipping entry with bad date {:?}", NAME, raw_date);
                continue;
            };
            let Some(count) = parse_count(raw_count) else {
                log::debug!("{}: skipping {} with bad count {}", NAME, date, raw_count);
                continue;
            };
            records.push(ActivityRecord { date, count });
        }
        Ok(records)
    }
}
