use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::signup::SignupEvent;

/// A row of the contacts table, keyed by `email`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub firstname: String,
}

impl Contact {
    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Result<Contact, ModelError> {
        Ok(Contact {
            email: string_attribute(item, "email")?,
            firstname: string_attribute(item, "firstname")?,
        })
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("email".to_string(), AttributeValue::S(self.email.clone())),
            ("firstname".to_string(), AttributeValue::S(self.firstname.clone())),
        ])
    }
}

impl From<&SignupEvent> for Contact {
    fn from(event: &SignupEvent) -> Self {
        Contact {
            email: event.mailaddress.clone(),
            firstname: event.firstname.clone(),
        }
    }
}

fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    name: &'static str,
) -> Result<String, ModelError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .map(ToOwned::to_owned)
        .ok_or(ModelError::MissingAttribute(name))
}
