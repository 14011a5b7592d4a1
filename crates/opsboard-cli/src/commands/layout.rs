use std::fs;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use opsboard_core::timeline::{items_from_json, parse_calendar_date, Axis, TimelineLayout};
use opsboard_core::TickGranularity;

#[derive(Subcommand)]
pub enum LayoutAction {
    /// Compute the shared axis and every bar placement
    Compute {
        /// JSON file holding an array of dashboard records
        #[arg(long)]
        input: PathBuf,
        /// Tick granularity
        #[arg(long, value_enum, default_value = "monthly")]
        granularity: GranularityArg,
        /// Reference date (YYYY-MM-DD) anchoring the empty-set window
        #[arg(long)]
        reference: Option<String>,
    },
    /// Compute the shared axis only
    Axis {
        /// JSON file holding an array of dashboard records
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "monthly")]
        granularity: GranularityArg,
        #[arg(long)]
        reference: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GranularityArg {
    Monthly,
    Quarterly,
}

impl From<GranularityArg> for TickGranularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Monthly => TickGranularity::Monthly,
            GranularityArg::Quarterly => TickGranularity::Quarterly,
        }
    }
}

pub fn run(action: LayoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LayoutAction::Compute {
            input,
            granularity,
            reference,
        } => {
            let items = items_from_json(&fs::read_to_string(&input)?)?;
            let layout = match reference.as_deref().map(parse_calendar_date).transpose()? {
                Some(date) => {
                    TimelineLayout::build_with_reference(&items, granularity.into(), date)
                }
                None => TimelineLayout::build(&items, granularity.into()),
            };
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        LayoutAction::Axis {
            input,
            granularity,
            reference,
        } => {
            let items = items_from_json(&fs::read_to_string(&input)?)?;
            let axis = match reference.as_deref().map(parse_calendar_date).transpose()? {
                Some(date) => Axis::compute_with_reference(&items, granularity.into(), date),
                None => Axis::compute(&items, granularity.into()),
            };
            println!("{}", serde_json::to_string_pretty(&axis)?);
        }
    }
    Ok(())
}
