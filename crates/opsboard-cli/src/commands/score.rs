use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use opsboard_core::{score_profile, CategoryScores, Rating, RoleId};

use crate::common::load_weight_table;

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Score a profile with a role's weight vector
    Profile {
        /// JSON file holding the category scores (0-5 scale)
        #[arg(long)]
        input: PathBuf,
        /// Role selecting the weight vector
        #[arg(long, default_value = "staff")]
        role: String,
        /// TOML weight table overriding the builtin defaults
        #[arg(long)]
        weights: Option<PathBuf>,
    },
    /// Classify a raw 0-5 score into its rating band
    #[command(allow_negative_numbers = true)]
    Rate { value: f64 },
}

pub fn run(action: ScoreAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScoreAction::Profile {
            input,
            role,
            weights,
        } => {
            let scores: CategoryScores = serde_json::from_str(&fs::read_to_string(&input)?)?;
            let role: RoleId = role.parse()?;
            let table = load_weight_table(weights)?;

            let breakdown = score_profile(&scores, table.weights_for(role));
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        ScoreAction::Rate { value } => {
            println!("{}", Rating::classify(value).label());
        }
    }
    Ok(())
}
