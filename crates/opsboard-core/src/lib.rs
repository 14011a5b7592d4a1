//! # Opsboard Core Library
//!
//! Core computation library for the Opsboard operations dashboard. The
//! surrounding application fetches attendance, CRM, and project records and
//! renders pages; this crate owns the two derived-computation units those
//! pages share:
//!
//! - **Timeline layout**: converts dated items into renderable Gantt
//!   geometry -- padded axis bounds, month/quarter tick marks, and
//!   percentage-based bar placement
//! - **KPI scoring**: reduces 0-5 category scores to a single weighted
//!   percentage with a per-category breakdown and a qualitative rating
//!
//! Both units are pure and synchronous: plain data in, plain data out,
//! recomputed in full on every call. The only I/O in the crate is explicit
//! weight-table loading.
//!
//! ## Key Components
//!
//! - [`TimelineLayout`]: one-call axis + bar pipeline for a chart
//! - [`Axis`]: shared date range and tick marks
//! - [`score_profile`]: weighted score with per-category breakdown
//! - [`RoleWeightTable`]: role weight configuration, validated at load

pub mod error;
pub mod roles;
pub mod scoring;
pub mod timeline;

pub use error::{ConfigError, CoreError, Result};
pub use roles::{RoleId, RoleWeightTable};
pub use scoring::{
    overall_score_percent, score_profile, CategoryScores, CategoryWeights, Rating, ScoreBreakdown,
    ScoreCategory,
};
pub use timeline::{
    compute_bar, parse_calendar_date, Axis, BarGeometry, ItemCategory, ItemStatus, Tick,
    TickGranularity, TimelineItem, TimelineLayout,
};
