use std::env;

use sendgrid::ApiKeySource;

use crate::error::ConfigError;

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dynamodb_region: Option<String>,
    pub api_key: ApiKeySource,
    pub sendgrid_api_url: Option<String>,
    pub from_address: String,
    pub template_id: String,
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let api_key = match (
            optional("SENDGRID_API_KEY"),
            optional("SENDGRID_API_KEY_PARAMETER"),
        ) {
            (Some(api_key), _) => ApiKeySource::Plain(api_key),
            (None, Some(parameter)) => ApiKeySource::SsmParameter(parameter),
            (None, None) => return Err(ConfigError::MissingApiKey),
        };

        Ok(Config {
            dynamodb_region: optional("AWS_DYNAMODB_REGION"),
            api_key,
            sendgrid_api_url: optional("SENDGRID_API_URL"),
            from_address: required("SENDGRID_FROM_ADDRESS")?,
            template_id: required("SENDGRID_TEMPLATE_ID")?,
            table_name: required("TABLE_NAME")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|value| value.to_string())
    }

    const COMPLETE: [(&str, &str); 5] = [
        ("AWS_DYNAMODB_REGION", "eu-central-1"),
        ("SENDGRID_API_KEY", "SG.key"),
        ("SENDGRID_FROM_ADDRESS", "hello@example.org"),
        ("SENDGRID_TEMPLATE_ID", "d-123"),
        ("TABLE_NAME", "Contacts"),
    ];

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&COMPLETE)).unwrap();

        assert_eq!(
            config,
            Config {
                dynamodb_region: Some("eu-central-1".to_string()),
                api_key: ApiKeySource::Plain("SG.key".to_string()),
                sendgrid_api_url: None,
                from_address: "hello@example.org".to_string(),
                template_id: "d-123".to_string(),
                table_name: "Contacts".to_string(),
            }
        );
    }

    #[test]
    fn region_is_optional() {
        let config = Config::from_lookup(lookup(&COMPLETE[1..])).unwrap();
        assert_eq!(config.dynamodb_region, None);
    }

    #[test]
    fn api_key_falls_back_to_ssm_parameter() {
        let vars = [
            ("SENDGRID_API_KEY_PARAMETER", "/signup/sendgrid-api-key"),
            ("SENDGRID_FROM_ADDRESS", "hello@example.org"),
            ("SENDGRID_TEMPLATE_ID", "d-123"),
            ("TABLE_NAME", "Contacts"),
        ];

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(
            config.api_key,
            ApiKeySource::SsmParameter("/signup/sendgrid-api-key".to_string())
        );
    }

    #[test]
    fn plain_api_key_wins_over_parameter() {
        let mut vars = COMPLETE.to_vec();
        vars.push(("SENDGRID_API_KEY_PARAMETER", "/signup/sendgrid-api-key"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.api_key, ApiKeySource::Plain("SG.key".to_string()));
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let vars: Vec<_> = COMPLETE
            .iter()
            .copied()
            .filter(|(name, _)| *name != "SENDGRID_API_KEY")
            .collect();

        assert_eq!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn empty_table_name_is_missing() {
        let mut vars = COMPLETE.to_vec();
        vars.retain(|(name, _)| *name != "TABLE_NAME");
        vars.push(("TABLE_NAME", ""));

        assert_eq!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Missing("TABLE_NAME"))
        );
    }
}
