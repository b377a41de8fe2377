use crate::{
    ThisError,
    config::ConfigError,
    domain::policy::voting_power::VotingPowerError,
    dto::{NormalizeError, error::Error as PublicError},
};

///
/// Error
///
/// Crate-level error. Not candid-exposed; anything leaving the crate in a
/// summary is converted into the public envelope via [`Error::public`].
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    VotingPower(#[from] VotingPowerError),
}

impl Error {
    #[must_use]
    pub fn public(&self) -> PublicError {
        match self {
            Self::Config(err) => PublicError::invalid(err.to_string()),
            Self::Normalize(err) => PublicError::invalid(err.to_string()),
            Self::VotingPower(err) => PublicError::overflow(err.to_string()),
        }
    }
}

///
/// TESTS
///
