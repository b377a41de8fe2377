mod governance;
mod log;

pub use governance::*;
pub use log::*;

use crate::{
    Error, ThisError,
    config::ConfigError,
    ids::GoverningBodyId,
    model::GovernanceParameters,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub log: LogConfig,

    // parameters per governing body
    #[serde(default)]
    pub governing_bodies: BTreeMap<GoverningBodyId, GovernanceParameters>,
}

impl ConfigModel {
    /// Parameters for one governing body. Unknown bodies get the all-zero
    /// set: no minimum dissolve delay and no bonuses.
    #[must_use]
    pub fn parameters(&self, id: &GoverningBodyId) -> GovernanceParameters {
        self.governing_bodies.get(id).copied().unwrap_or_default()
    }

    /// Push process-wide settings (currently the log level).
    pub fn apply(&self) {
        self.log.apply();
    }
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.log.validate()?;

        for (id, params) in &self.governing_bodies {
            validate_governing_body(id, params)?;
        }

        Ok(())
    }
}
