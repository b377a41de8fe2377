use super::{ConfigSchemaError, Validate};
use crate::log::{self, Level};
use serde::{Deserialize, Serialize};

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub min_level: Level,
}

impl LogConfig {
    pub fn apply(&self) {
        log::set_min_level(self.min_level);
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        Ok(())
    }
}
