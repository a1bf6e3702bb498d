use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected environment variable {0} not set")]
    Missing(&'static str),
    #[error("Neither SENDGRID_API_KEY nor SENDGRID_API_KEY_PARAMETER is set")]
    MissingApiKey,
}
