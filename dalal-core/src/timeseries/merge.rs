use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::timeseries::date::parse_calendar_date;
use crate::{DalalError, MergedRow, Series};

/// A point left out of the merge.
///
/// Either its date could not be placed on the calendar, or its series used the
/// reserved [`MergedRow::DATE_FIELD`] name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedPoint {
    /// Name of the series the point came from.
    pub series: String,
    /// The raw date string of the point.
    pub date: String,
    /// Parser message, or why the series was refused.
    pub reason: String,
}

/// Result of a merge: the aligned rows plus any points that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeOutcome {
    /// One row per distinct calendar date, oldest first.
    pub rows: Vec<MergedRow>,
    /// Points excluded because their date did not parse or their series name is reserved.
    pub dropped: Vec<DroppedPoint>,
}

impl MergeOutcome {
    /// True when the merge produced no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Merge named series into one row per distinct calendar date.
///
/// - Rows are keyed by the parsed calendar date, so `2024-01-02` and
///   `Tue, 02 Jan 2024 00:00:00 GMT` land on the same row.
/// - Every row carries a field for every input series name; a series with no
///   value at that date contributes `None`.
/// - A point with a `None` value still registers its date.
/// - For a repeated (series name, date) pair the later value wins.
/// - Rows are returned in chronological order.
///
/// A point whose date does not parse is excluded and reported in
/// [`MergeOutcome::dropped`]; the rest of the merge proceeds. A series named
/// [`MergedRow::DATE_FIELD`] would shadow the row date, so it is skipped whole
/// and each of its points reported the same way. No series, or only empty
/// series, yields an empty outcome.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "dalal::timeseries::merge_series", skip(series))
)]
pub fn merge_series<'a, I>(series: I) -> MergeOutcome
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut names: Vec<&str> = Vec::new();
    let mut by_day: BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>> = BTreeMap::new();
    let mut dropped: Vec<DroppedPoint> = Vec::new();

    for s in series {
        if s.name == MergedRow::DATE_FIELD {
            #[cfg(feature = "tracing")]
            tracing::warn!(series = %s.name, points = s.points.len(), "skipping series with reserved name");
            dropped.extend(s.points.iter().map(|p| DroppedPoint {
                series: s.name.clone(),
                date: p.date.clone(),
                reason: reserved_name_reason(),
            }));
            continue;
        }
        if !names.contains(&s.name.as_str()) {
            names.push(s.name.as_str());
        }
        for p in &s.points {
            let day = match parse_calendar_date(&p.date) {
                Ok(day) => day,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(series = %s.name, date = %p.date, "dropping point with unparseable date");
                    dropped.push(DroppedPoint {
                        series: s.name.clone(),
                        date: p.date.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let row = by_day.entry(day).or_default();
            if let Some(v) = p.value {
                row.insert(s.name.clone(), Some(v));
            }
        }
    }

    let rows = by_day
        .into_iter()
        .map(|(date, mut values)| {
            for name in &names {
                values.entry((*name).to_string()).or_insert(None);
            }
            MergedRow { date, values }
        })
        .collect();

    MergeOutcome { rows, dropped }
}

fn reserved_name_reason() -> String {
    format!(
        "series name `{}` collides with the row date key",
        MergedRow::DATE_FIELD
    )
}

/// Like [`merge_series`], but rejects a series that repeats a calendar date.
///
/// The default merge silently keeps the last value for a repeated date; use
/// this variant when such input should be treated as a validation failure.
///
/// # Errors
/// Returns `Err(DalalError::InvalidArg)` for a series named
/// [`MergedRow::DATE_FIELD`], and `Err(DalalError::Data)` naming the series and
/// date of the first repeat found.
pub fn merge_series_strict<'a, I>(series: I) -> Result<MergeOutcome, DalalError>
where
    I: IntoIterator<Item = &'a Series>,
    I::IntoIter: Clone,
{
    let iter = series.into_iter();
    for s in iter.clone() {
        if s.name == MergedRow::DATE_FIELD {
            return Err(DalalError::InvalidArg(reserved_name_reason()));
        }
        let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(s.points.len());
        for p in &s.points {
            // Unparseable dates are reported by the merge itself.
            if let Ok(day) = parse_calendar_date(&p.date)
                && !seen.insert(day)
            {
                return Err(DalalError::Data(format!(
                    "series {} repeats date {day}",
                    s.name
                )));
            }
        }
    }
    Ok(merge_series(iter))
}
