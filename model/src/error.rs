use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("`{0}` attribute is missing or is not a string")]
    MissingAttribute(&'static str),
}
