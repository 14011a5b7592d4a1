//! Helpers shared by the command modules.

use std::path::PathBuf;

use opsboard_core::RoleWeightTable;

/// Load the role weight table, falling back to the builtin defaults when no
/// override file is given. The table is validated on load.
pub fn load_weight_table(
    path: Option<PathBuf>,
) -> Result<RoleWeightTable, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(RoleWeightTable::load(&path)?),
        None => Ok(RoleWeightTable::builtin()),
    }
}
