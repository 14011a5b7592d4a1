//! Display styling for item statuses and categories.
//!
//! A closed enum-to-struct mapping: every variant resolves through an
//! exhaustive match, so there is no string-keyed lookup table and no
//! runtime fallback bucket.

use serde::Serialize;

use super::item::{ItemCategory, ItemStatus};

/// Render hints for one status or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayStyle {
    /// Hex fill colour for the bar or badge
    pub color: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

impl ItemStatus {
    /// Render hints for this status.
    pub fn style(&self) -> DisplayStyle {
        match self {
            Self::Planned => DisplayStyle {
                color: "#9ca3af",
                label: "Planned",
            },
            Self::Active => DisplayStyle {
                color: "#3b82f6",
                label: "Active",
            },
            Self::OnHold => DisplayStyle {
                color: "#f59e0b",
                label: "On Hold",
            },
            Self::Completed => DisplayStyle {
                color: "#22c55e",
                label: "Completed",
            },
            Self::Cancelled => DisplayStyle {
                color: "#ef4444",
                label: "Cancelled",
            },
        }
    }
}

impl ItemCategory {
    /// Render hints for this category.
    pub fn style(&self) -> DisplayStyle {
        match self {
            Self::Project => DisplayStyle {
                color: "#6366f1",
                label: "Project",
            },
            Self::Sale => DisplayStyle {
                color: "#10b981",
                label: "Sale",
            },
            Self::Lead => DisplayStyle {
                color: "#06b6d4",
                label: "Lead",
            },
            Self::Engagement => DisplayStyle {
                color: "#a855f7",
                label: "Engagement",
            },
        }
    }
}
