use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{config::Region, types::ReturnValue, Client};
use model::contact::Contact;

use crate::error::RepositoryError;

/// Durable storage for signed-up contacts.
///
/// `put` is an upsert keyed by `email` and hands back the record it replaced, if that
/// record could be read as a contact.
#[async_trait]
pub trait ContactStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn put(&self, contact: &Contact) -> Result<Option<Contact>, Self::Error>;
}

pub struct ContactRepository {
    client: Client,
    table_name: String,
}

impl ContactRepository {
    pub fn new(shared_config: &SdkConfig, table_name: String) -> ContactRepository {
        ContactRepository {
            client: Client::new(shared_config),
            table_name,
        }
    }

    /// Same as `new`, but pins the DynamoDB client to `region` instead of the shared config's.
    pub fn new_in_region(
        shared_config: &SdkConfig,
        region: String,
        table_name: String,
    ) -> ContactRepository {
        let config = aws_sdk_dynamodb::config::Builder::from(shared_config)
            .region(Region::new(region))
            .build();

        ContactRepository {
            client: Client::from_conf(config),
            table_name,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    type Error = RepositoryError;

    async fn put(&self, contact: &Contact) -> Result<Option<Contact>, RepositoryError> {
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(contact.to_dynamo_item()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        // The write has already happened, so an unreadable old item only costs the log line.
        let previous = match output.attributes().filter(|attributes| !attributes.is_empty()) {
            Some(attributes) => match Contact::from_dynamo_item(attributes) {
                Ok(previous) => Some(previous),
                Err(err) => {
                    tracing::warn!("Replaced an item in {} that is not a contact: {}", self.table_name, err);
                    None
                }
            },
            None => None,
        };

        Ok(previous)
    }
}
