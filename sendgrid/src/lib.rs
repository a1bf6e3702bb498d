mod error;
mod message;

pub use error::SendGridError;
pub use message::Message;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client as SsmClient;

pub const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";

/// Anything that can deliver a [`Message`].
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &Message) -> Result<(), SendGridError>;
}

/// Client for the SendGrid v3 mail API. Holds no per-request state, so one instance
/// can serve every invocation of a warm container.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    pub fn new(api_key: String) -> Client {
        Client::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Client {
        Client {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn mail_send_url(&self) -> String {
        format!("{}/v3/mail/send", self.base_url)
    }
}

#[async_trait]
impl Mailer for Client {
    async fn send(&self, message: &Message) -> Result<(), SendGridError> {
        let response = self
            .client
            .post(self.mail_send_url())
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("SendGrid accepted template {}", message.template_id);
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SendGridError::Status { status, body })
        }
    }
}

/// Where the SendGrid API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    Plain(String),
    SsmParameter(String),
}

/// Resolves the API key, reading the SSM parameter (with decryption) when configured so.
pub async fn resolve_api_key(
    shared_config: &SdkConfig,
    source: ApiKeySource,
) -> Result<String, SendGridError> {
    match source {
        ApiKeySource::Plain(api_key) => Ok(api_key),
        ApiKeySource::SsmParameter(name) => {
            let client = SsmClient::new(shared_config);
            let output = client
                .get_parameter()
                .name(&name)
                .with_decryption(true)
                .send()
                .await
                .map_err(aws_sdk_ssm::Error::from)?;

            output
                .parameter()
                .and_then(|parameter| parameter.value())
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
                .ok_or(SendGridError::MissingApiKey(name))
        }
    }
}
