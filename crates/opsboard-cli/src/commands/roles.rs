use std::path::PathBuf;

use clap::Subcommand;

use crate::common::load_weight_table;

#[derive(Subcommand)]
pub enum RolesAction {
    /// Print the validated role weight table
    Show {
        /// TOML weight table overriding the builtin defaults
        #[arg(long)]
        weights: Option<PathBuf>,
    },
}

pub fn run(action: RolesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RolesAction::Show { weights } => {
            let table = load_weight_table(weights)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }
    Ok(())
}
