use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendGridError {
    #[error("Request to SendGrid failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("SendGrid answered with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("SendGrid API key parameter `{0}` has no value")]
    MissingApiKey(String),
    #[error(transparent)]
    Ssm(#[from] aws_sdk_ssm::Error),
}
