//! Timeline item types and utilities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::{days_between, parse_calendar_date};
use crate::error::{CoreError, Result};

/// Business category of a timeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Project,
    Sale,
    Lead,
    Engagement,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Sale => "sale",
            Self::Lead => "lead",
            Self::Engagement => "engagement",
        }
    }
}

/// Workflow status of a timeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Planned,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A single item on the timeline
///
/// Items are read-only snapshots fetched per page view. Category and status
/// drive grouping and colour only; layout math uses the dates alone. An
/// inverted date range (`end_date` before `start_date`) is kept as-is, and
/// [`duration_days`](Self::duration_days) clamps it to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percent complete, 0-100
    #[serde(default)]
    pub progress: u8,
    pub category: ItemCategory,
    #[serde(default)]
    pub status: ItemStatus,
}

impl TimelineItem {
    /// Create a new timeline item with default progress and status.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_date,
            end_date,
            progress: 0,
            category,
            status: ItemStatus::Planned,
        }
    }

    /// Set progress, clamped to 0-100
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(100);
        self
    }

    /// Set status
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Duration in whole days; inverted ranges clamp to zero.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start_date, self.end_date).max(0)
    }
}

/// Raw dashboard record with string-typed dates, as fetched by the pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub progress: u8,
    pub category: ItemCategory,
    #[serde(default)]
    pub status: ItemStatus,
}

impl ItemRecord {
    /// Convert into a [`TimelineItem`], parsing both date strings strictly.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidItem`] naming the record whose date
    /// failed to parse.
    pub fn into_item(self) -> Result<TimelineItem> {
        let start_date = parse_calendar_date(&self.start_date)
            .map_err(|e| CoreError::InvalidItem {
                item_id: self.id.clone(),
                message: e.to_string(),
            })?;
        let end_date = parse_calendar_date(&self.end_date).map_err(|e| CoreError::InvalidItem {
            item_id: self.id.clone(),
            message: e.to_string(),
        })?;

        Ok(TimelineItem {
            id: self.id,
            title: self.title,
            start_date,
            end_date,
            progress: self.progress.min(100),
            category: self.category,
            status: self.status,
        })
    }
}

/// Parse a JSON array of dashboard records into timeline items.
///
/// # Errors
/// Returns [`CoreError::Json`] for malformed JSON and
/// [`CoreError::InvalidItem`] for a record with an unparsable date.
pub fn items_from_json(raw: &str) -> Result<Vec<TimelineItem>> {
    let records: Vec<ItemRecord> = serde_json::from_str(raw)?;
    records.into_iter().map(ItemRecord::into_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_is_clamped() {
        let item = TimelineItem::new(
            "1",
            "Rollout",
            date(2024, 10, 1),
            date(2024, 12, 31),
            ItemCategory::Project,
        )
        .with_progress(150);

        assert_eq!(item.progress, 100);
    }

    #[test]
    fn test_duration_clamps_inverted_range() {
        let item = TimelineItem::new(
            "1",
            "Backwards",
            date(2024, 10, 10),
            date(2024, 10, 1),
            ItemCategory::Sale,
        );

        assert_eq!(item.duration_days(), 0);
    }

    #[test]
    fn test_zero_duration() {
        let item = TimelineItem::new(
            "1",
            "One-day",
            date(2024, 10, 1),
            date(2024, 10, 1),
            ItemCategory::Lead,
        );

        assert_eq!(item.duration_days(), 0);
    }

    #[test]
    fn test_record_conversion() {
        let record = ItemRecord {
            id: "lead-7".into(),
            title: "Acme follow-up".into(),
            start_date: "2024-10-01".into(),
            end_date: "2024-10-15".into(),
            progress: 40,
            category: ItemCategory::Lead,
            status: ItemStatus::Active,
        };

        let item = record.into_item().unwrap();
        assert_eq!(item.start_date, date(2024, 10, 1));
        assert_eq!(item.duration_days(), 14);
    }

    #[test]
    fn test_record_conversion_names_offending_item() {
        let record = ItemRecord {
            id: "lead-9".into(),
            title: String::new(),
            start_date: "soon".into(),
            end_date: "2024-10-15".into(),
            progress: 0,
            category: ItemCategory::Lead,
            status: ItemStatus::Planned,
        };

        match record.into_item().unwrap_err() {
            CoreError::InvalidItem { item_id, message } => {
                assert_eq!(item_id, "lead-9");
                assert!(message.contains("soon"));
            }
            other => panic!("Expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn test_items_from_json() {
        let raw = r#"[
            {"id": "a", "title": "A", "start_date": "2024-10-01",
             "end_date": "2024-11-01", "category": "project"},
            {"id": "b", "start_date": "2024-10-05", "end_date": "2024-10-05",
             "progress": 80, "category": "sale", "status": "completed"}
        ]"#;

        let items = items_from_json(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].status, ItemStatus::Planned);
        assert_eq!(items[1].status, ItemStatus::Completed);
        assert_eq!(items[1].progress, 80);
    }
}
