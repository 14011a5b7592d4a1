//! Role-specific weight tables.
//!
//! Each role maps to one [`CategoryWeights`] vector. The table is an
//! explicit structure validated once when it is built or loaded, so the
//! scoring call sites can trust it without re-checking per call. Overrides
//! ship as a TOML file with one section per role; a section left out keeps
//! the compiled-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::CategoryWeights;

/// Role a weight vector is selected by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleId {
    Staff,
    Supervisor,
    Manager,
}

impl RoleId {
    /// All roles, in seniority order.
    pub const ALL: [RoleId; 3] = [RoleId::Staff, RoleId::Supervisor, RoleId::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Supervisor => "supervisor",
            Self::Manager => "manager",
        }
    }
}

impl std::str::FromStr for RoleId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "supervisor" => Ok(Self::Supervisor),
            "manager" => Ok(Self::Manager),
            other => Err(ConfigError::UnknownRole(other.to_string())),
        }
    }
}

/// Validated mapping from role to weight vector.
///
/// Serialized to/from TOML with one section per role:
///
/// ```toml
/// [staff]
/// knowledge = 0.40
/// people = 0.30
/// service = 0.20
/// business = 0.10
/// leadership = 0.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleWeightTable {
    #[serde(default = "default_staff_weights")]
    pub staff: CategoryWeights,
    #[serde(default = "default_supervisor_weights")]
    pub supervisor: CategoryWeights,
    #[serde(default = "default_manager_weights")]
    pub manager: CategoryWeights,
}

// Compiled-in defaults. Staff carries no leadership pillar, by convention a
// weight of 0 marks the pillar as not applicable to the role.
fn default_staff_weights() -> CategoryWeights {
    CategoryWeights::new(0.40, 0.30, 0.20, 0.10, 0.0)
}
fn default_supervisor_weights() -> CategoryWeights {
    CategoryWeights::new(0.30, 0.25, 0.20, 0.10, 0.15)
}
fn default_manager_weights() -> CategoryWeights {
    CategoryWeights::new(0.25, 0.20, 0.15, 0.15, 0.25)
}

impl Default for RoleWeightTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RoleWeightTable {
    /// The compiled-in default table.
    pub fn builtin() -> Self {
        Self {
            staff: default_staff_weights(),
            supervisor: default_supervisor_weights(),
            manager: default_manager_weights(),
        }
    }

    /// Weight vector for one role.
    pub fn weights_for(&self, role: RoleId) -> &CategoryWeights {
        match role {
            RoleId::Staff => &self.staff,
            RoleId::Supervisor => &self.supervisor,
            RoleId::Manager => &self.manager,
        }
    }

    /// Validate every role's weight vector, naming the failing role.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for role in RoleId::ALL {
            if let Err(message) = self.weights_for(role).validate() {
                return Err(ConfigError::InvalidWeights {
                    role: role.as_str().to_string(),
                    message,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML weight table.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let table: Self =
            toml::from_str(raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a TOML weight table from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }
}
