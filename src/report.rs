use crate::errors::ReportError;
use crate::models::DailyCount;
use chrono::{NaiveDate, NaiveDateTime};
use std::{collections::BTreeMap, path::Path};
use tokio::fs;
use tracing::{info, warn};

const FIELD_COUNT: usize = 5;

/// Re-reads the whole log and counts submissions per calendar day, oldest first.
pub async fn daily_counts(path: &Path) -> Result<Vec<DailyCount>, ReportError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let counts = parse_log(&contents)?;
    Ok(counts
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect())
}

/// Best effort: a malformed log produces a diagnostic, never an error.
pub async fn report(path: &Path) {
    match daily_counts(path).await {
        Ok(days) => {
            info!("contact form submissions by day:");
            for day in &days {
                info!("  {}  {}", day.date, day.count);
            }
        }
        Err(err) => warn!("error analyzing contact data: {err}"),
    }
}

pub fn parse_log(contents: &str) -> Result<BTreeMap<NaiveDate, u64>, ReportError> {
    let mut days = BTreeMap::new();
    let mut seen = 0usize;

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        // Fields are never quoted, so a comma inside one shifts the rest.
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ReportError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let date = parse_date(fields[0]).ok_or_else(|| ReportError::Timestamp {
            line: line_no,
            value: fields[0].to_string(),
        })?;
        *days.entry(date).or_insert(0u64) += 1;
        seen += 1;
    }

    if seen == 0 {
        return Err(ReportError::Empty);
    }

    Ok(days)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|ts| ts.date())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
