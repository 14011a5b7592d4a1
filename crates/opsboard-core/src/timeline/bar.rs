//! Bar placement against a shared axis.
//!
//! Converts item date ranges into percentage-based left/width offsets that
//! the dashboard renders directly as positioned bars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::axis::{Axis, TickGranularity};
use super::date::days_between;
use super::item::{ItemCategory, ItemStatus, TimelineItem};
use super::style::DisplayStyle;

/// Minimum rendered bar width as a percentage of the axis.
///
/// Zero-duration and inverted items keep a visible, clickable bar.
pub const MIN_BAR_WIDTH_PCT: f64 = 2.0;

/// Horizontal placement of one bar, in percentages of the axis width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
}

impl BarGeometry {
    /// Right edge of the bar
    pub fn right_pct(&self) -> f64 {
        self.left_pct + self.width_pct
    }

    /// Whether the bar extends past the right edge of the axis.
    ///
    /// Possible when a bar is paired with an axis computed from a different
    /// item set (a stale filter, for instance). The geometry is left
    /// unclamped; the renderer decides whether to cut the bar off or draw
    /// an overflow indicator.
    pub fn overflows(&self) -> bool {
        self.right_pct() > 100.0
    }
}

/// Compute the placement of a single item against an axis.
///
/// `left_pct` clamps at the left edge; `width_pct` never drops below
/// [`MIN_BAR_WIDTH_PCT`]. There is no upper clamp -- see
/// [`BarGeometry::overflows`].
pub fn compute_bar(item: &TimelineItem, axis: &Axis) -> BarGeometry {
    let total = axis.total_days as f64;
    let left = days_between(axis.padded_start, item.start_date) as f64 / total * 100.0;
    let width = item.duration_days() as f64 / total * 100.0;

    BarGeometry {
        left_pct: left.max(0.0),
        width_pct: width.max(MIN_BAR_WIDTH_PCT),
    }
}

/// A bar positioned and decorated for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedBar {
    pub id: String,
    pub title: String,
    pub category: ItemCategory,
    pub status: ItemStatus,
    /// Percent complete carried through from the item
    pub progress: u8,
    pub geometry: BarGeometry,
    /// Width of the completed overlay, as a percentage of the axis
    pub progress_pct: f64,
    /// Render hints resolved from the item status
    pub style: DisplayStyle,
}

/// Complete renderable geometry for one chart: the shared axis plus every
/// item positioned against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub axis: Axis,
    pub bars: Vec<PositionedBar>,
}

impl TimelineLayout {
    /// Compute the axis and position every item against it in one call.
    pub fn build(items: &[TimelineItem], granularity: TickGranularity) -> Self {
        Self::from_axis(items, Axis::compute(items, granularity))
    }

    /// Deterministic variant with an explicit reference date for the
    /// empty-set fallback window.
    pub fn build_with_reference(
        items: &[TimelineItem],
        granularity: TickGranularity,
        reference: NaiveDate,
    ) -> Self {
        Self::from_axis(
            items,
            Axis::compute_with_reference(items, granularity, reference),
        )
    }

    fn from_axis(items: &[TimelineItem], axis: Axis) -> Self {
        let bars = items
            .iter()
            .map(|item| {
                let geometry = compute_bar(item, &axis);
                PositionedBar {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    category: item.category,
                    status: item.status,
                    progress: item.progress,
                    progress_pct: geometry.width_pct * f64::from(item.progress) / 100.0,
                    style: item.status.style(),
                    geometry,
                }
            })
            .collect();

        Self { axis, bars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(id: &str, start: NaiveDate, end: NaiveDate) -> TimelineItem {
        TimelineItem::new(id, id, start, end, ItemCategory::Project)
    }

    #[test]
    fn test_zero_duration_gets_width_floor() {
        let items = vec![
            item("anchor", date(2024, 9, 1), date(2024, 12, 31)),
            item("point", date(2024, 10, 1), date(2024, 10, 1)),
        ];
        let axis = Axis::compute_with_reference(&items, TickGranularity::Monthly, date(2024, 9, 1));

        let bar = compute_bar(&items[1], &axis);
        assert_eq!(bar.width_pct, MIN_BAR_WIDTH_PCT);
    }

    #[test]
    fn test_inverted_range_gets_width_floor() {
        let items = vec![
            item("anchor", date(2024, 9, 1), date(2024, 12, 31)),
            item("backwards", date(2024, 10, 10), date(2024, 10, 1)),
        ];
        let axis = Axis::compute_with_reference(&items, TickGranularity::Monthly, date(2024, 9, 1));

        let bar = compute_bar(&items[1], &axis);
        assert_eq!(bar.width_pct, MIN_BAR_WIDTH_PCT);
    }

    #[test]
    fn test_left_is_never_negative() {
        let items = vec![item("a", date(2024, 10, 1), date(2024, 11, 1))];
        let axis = Axis::compute_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));

        // The item set's own axis pads by 15 days, so left sits inside.
        let bar = compute_bar(&items[0], &axis);
        assert!(bar.left_pct >= 0.0);

        // An item starting before a foreign axis clamps at the edge.
        let early = item("early", date(2024, 1, 1), date(2024, 10, 20));
        let bar = compute_bar(&early, &axis);
        assert_eq!(bar.left_pct, 0.0);
    }

    #[test]
    fn test_bar_spans_its_share_of_the_axis() {
        // 30-day item on a 60-day axis: width 50%, left 25%.
        let items = vec![item("a", date(2024, 10, 1), date(2024, 10, 31))];
        let axis = Axis::compute_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));

        let bar = compute_bar(&items[0], &axis);
        assert_eq!(axis.total_days, 60);
        assert!((bar.left_pct - 25.0).abs() < 1e-9, "left {}", bar.left_pct);
        assert!((bar.width_pct - 50.0).abs() < 1e-9, "width {}", bar.width_pct);
        assert!(!bar.overflows());
    }

    #[test]
    fn test_overflow_past_foreign_axis_is_reported_not_clamped() {
        let items = vec![item("a", date(2024, 10, 1), date(2024, 10, 31))];
        let axis = Axis::compute_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));

        let late = item("late", date(2024, 11, 1), date(2025, 6, 1));
        let bar = compute_bar(&late, &axis);

        assert!(bar.overflows());
        assert!(bar.right_pct() > 100.0);
    }

    #[test]
    fn test_layout_carries_progress_overlay() {
        let items = vec![
            item("a", date(2024, 10, 1), date(2024, 10, 31)).with_progress(50),
        ];

        let layout =
            TimelineLayout::build_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));

        let bar = &layout.bars[0];
        assert_eq!(bar.progress, 50);
        assert!((bar.progress_pct - bar.geometry.width_pct * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let items = vec![
            item("a", date(2024, 10, 1), date(2024, 10, 31)),
            item("b", date(2024, 11, 1), date(2024, 11, 15)).with_status(ItemStatus::Active),
        ];

        let first =
            TimelineLayout::build_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));
        let second =
            TimelineLayout::build_with_reference(&items, TickGranularity::Monthly, date(2024, 10, 1));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_layout_has_axis_but_no_bars() {
        let layout =
            TimelineLayout::build_with_reference(&[], TickGranularity::Monthly, date(2024, 10, 15));

        assert!(layout.bars.is_empty());
        assert_eq!(layout.axis.padded_start, date(2024, 10, 1));
    }
}
