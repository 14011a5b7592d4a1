//! Shared time axis computation.
//!
//! Every bar on a chart is positioned against one axis computed from the
//! full item set: padded date bounds plus month or quarter tick marks.
//! Bounds are padded by a fixed calendar-day margin so bars never touch the
//! chart edge, and all positions are day-based percentages -- tick labels
//! step by calendar months, but the math never counts months.

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::date::days_between;
use super::item::TimelineItem;

/// Calendar days of margin added on each side of the item range.
pub const PAD_DAYS: i64 = 15;

/// Months spanned by the fallback window when the item set is empty.
pub const EMPTY_WINDOW_MONTHS: u32 = 6;

/// Tick mark step on the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickGranularity {
    Monthly,
    Quarterly,
}

impl TickGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }

    /// Months between consecutive ticks
    pub fn step_months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
        }
    }
}

/// A labeled subdivision of the axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub date: NaiveDate,
    pub label: String,
    /// Horizontal position as a percentage of the axis width, never negative
    pub position_pct: f64,
}

/// The shared date range all bars on a chart are positioned against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub padded_start: NaiveDate,
    pub padded_end: NaiveDate,
    /// Whole days between the padded bounds
    pub total_days: i64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Compute the axis for an item set.
    ///
    /// The empty-set fallback window is anchored at the current UTC date;
    /// use [`compute_with_reference`](Self::compute_with_reference) when the
    /// caller needs a deterministic anchor.
    pub fn compute(items: &[TimelineItem], granularity: TickGranularity) -> Self {
        Self::compute_with_reference(items, granularity, Utc::now().date_naive())
    }

    /// Compute the axis with an explicit reference date.
    ///
    /// Non-empty item sets get bounds padded by [`PAD_DAYS`] on each side of
    /// the overall date range. An empty set falls back to a window of
    /// [`EMPTY_WINDOW_MONTHS`] months starting on the first day of the month
    /// containing `reference`, with no extra padding.
    ///
    /// Deterministic: identical inputs yield an identical axis.
    pub fn compute_with_reference(
        items: &[TimelineItem],
        granularity: TickGranularity,
        reference: NaiveDate,
    ) -> Self {
        let (padded_start, padded_end) = match range_bounds(items) {
            Some((min_start, max_end)) => (
                min_start - Duration::days(PAD_DAYS),
                max_end + Duration::days(PAD_DAYS),
            ),
            None => {
                let start = first_of_month(reference);
                (start, start + Months::new(EMPTY_WINDOW_MONTHS))
            }
        };

        // At least one day wide, so positions always divide cleanly even for
        // a degenerate set where every range is inverted.
        let total_days = days_between(padded_start, padded_end).max(1);
        let ticks = generate_ticks(padded_start, padded_end, total_days, granularity);

        Self {
            padded_start,
            padded_end,
            total_days,
            ticks,
        }
    }
}

/// Overall `[min(start_date), max(end_date)]` range of an item set.
fn range_bounds(items: &[TimelineItem]) -> Option<(NaiveDate, NaiveDate)> {
    let min_start = items.iter().map(|item| item.start_date).min()?;
    let max_end = items.iter().map(|item| item.end_date).max()?;
    Some((min_start, max_end))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Walk month steps from the first of the month containing `padded_start`
/// until past `padded_end`. The leading tick may precede `padded_start`, so
/// its position clamps to zero.
fn generate_ticks(
    padded_start: NaiveDate,
    padded_end: NaiveDate,
    total_days: i64,
    granularity: TickGranularity,
) -> Vec<Tick> {
    let step = Months::new(granularity.step_months());
    let mut ticks = Vec::new();
    let mut cursor = first_of_month(padded_start);

    while cursor <= padded_end {
        let position = days_between(padded_start, cursor) as f64 / total_days as f64 * 100.0;
        ticks.push(Tick {
            date: cursor,
            label: tick_label(cursor, granularity),
            position_pct: position.max(0.0),
        });
        cursor = cursor + step;
    }

    ticks
}

fn tick_label(date: NaiveDate, granularity: TickGranularity) -> String {
    match granularity {
        TickGranularity::Monthly => date.format("%b %Y").to_string(),
        TickGranularity::Quarterly => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
    }
}
