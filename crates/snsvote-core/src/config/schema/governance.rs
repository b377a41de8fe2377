use super::{ConfigSchemaError, Validate};
use crate::{ids::GoverningBodyId, model::GovernanceParameters};

pub const GOVERNING_BODY_ID_MAX_BYTES: usize = 64;

impl Validate for GovernanceParameters {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        let (min, max) = (self.min_dissolve_delay_seconds, self.max_dissolve_delay_seconds);

        // max of 0 means no bonus cap configured
        if max > 0 && min > max {
            return Err(ConfigSchemaError::ValidationError(format!(
                "min_dissolve_delay_seconds {min} exceeds max_dissolve_delay_seconds {max}",
            )));
        }

        Ok(())
    }
}

/// Check one `[governing_bodies.<id>]` entry.
pub fn validate_governing_body(
    id: &GoverningBodyId,
    params: &GovernanceParameters,
) -> Result<(), ConfigSchemaError> {
    let len = id.as_str().len();

    if len == 0 {
        return Err(ConfigSchemaError::ValidationError(
            "governing body id is empty".into(),
        ));
    }
    if len > GOVERNING_BODY_ID_MAX_BYTES {
        return Err(ConfigSchemaError::ValidationError(format!(
            "governing body '{id}' exceeds {GOVERNING_BODY_ID_MAX_BYTES} bytes",
        )));
    }

    params.validate().map_err(|err| {
        let ConfigSchemaError::ValidationError(msg) = err;
        ConfigSchemaError::ValidationError(format!("governing body '{id}': {msg}"))
    })
}

///
/// TESTS
///
