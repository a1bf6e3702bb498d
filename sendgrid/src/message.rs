use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

/// A dynamic-template email, serialized as the body of `POST /v3/mail/send`.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub to: String,
    pub from: String,
    pub template_id: String,
    pub dynamic_template_data: Map<String, Value>,
}

impl Message {
    pub fn new(to: String, from: String, template_id: String) -> Message {
        Message {
            to,
            from,
            template_id,
            dynamic_template_data: Map::new(),
        }
    }

    pub fn with_template_data(mut self, key: &str, value: impl Into<Value>) -> Message {
        self.dynamic_template_data.insert(key.to_string(), value.into());
        self
    }
}

#[derive(serde::Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
    #[serde(skip_serializing_if = "no_template_data")]
    dynamic_template_data: &'a Map<String, Value>,
}

fn no_template_data(data: &&Map<String, Value>) -> bool {
    data.is_empty()
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let personalizations = [Personalization {
            to: [Address { email: &self.to }],
            dynamic_template_data: &self.dynamic_template_data,
        }];

        let mut body = serializer.serialize_struct("Message", 3)?;
        body.serialize_field("personalizations", &personalizations)?;
        body.serialize_field("from", &Address { email: &self.from })?;
        body.serialize_field("template_id", &self.template_id)?;
        body.end()
    }
}
