//! Timeline layout engine.
//!
//! This module provides:
//! - Strict calendar date parsing and day arithmetic
//! - Timeline item types shared by the dashboard pages
//! - Shared axis computation with month/quarter tick marks
//! - Percentage-based bar placement against the axis

mod axis;
mod bar;
mod date;
mod item;
mod style;

pub use axis::{Axis, Tick, TickGranularity, EMPTY_WINDOW_MONTHS, PAD_DAYS};
pub use bar::{compute_bar, BarGeometry, PositionedBar, TimelineLayout, MIN_BAR_WIDTH_PCT};
pub use date::{days_between, parse_calendar_date, DATE_FORMAT};
pub use item::{items_from_json, ItemCategory, ItemRecord, ItemStatus, TimelineItem};
pub use style::DisplayStyle;
