//! SMS provider configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Supported SMS providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmsProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// Amazon Simple Notification Service
    AwsSns,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SmsProvider::Mock),
            "aws-sns" | "aws_sns" | "sns" => Ok(SmsProvider::AwsSns),
            _ => Err(format!("Invalid SMS provider: {}", s)),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProvider,

    /// AWS region used by SNS
    pub region: String,

    /// Static AWS access key; the default credential chain is used when unset
    #[serde(default)]
    pub access_key_id: Option<String>,

    /// Static AWS secret key
    #[serde(default, skip_serializing)]
    pub secret_access_key: Option<String>,

    /// SMS sender ID (not supported in all regions)
    #[serde(default)]
    pub sender_id: Option<String>,

    /// SNS SMS type: "Transactional" or "Promotional"
    pub sms_type: String,

    /// Country calling code prepended to bare 10-digit numbers
    pub default_country_code: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            region: String::from("us-east-1"),
            access_key_id: None,
            secret_access_key: None,
            sender_id: None,
            sms_type: String::from("Transactional"),
            default_country_code: String::from("1"),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            provider: env_or("SMS_PROVIDER", defaults.provider),
            region: std::env::var("AWS_REGION").unwrap_or(defaults.region),
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
            sender_id: std::env::var("AWS_SNS_SENDER_ID").ok(),
            sms_type: std::env::var("AWS_SNS_SMS_TYPE").unwrap_or(defaults.sms_type),
            default_country_code: std::env::var("SMS_DEFAULT_COUNTRY_CODE")
                .unwrap_or(defaults.default_country_code),
        }
    }

    /// Check that the SMS type is one SNS accepts
    pub fn validate(&self) -> Result<(), String> {
        if self.sms_type != "Transactional" && self.sms_type != "Promotional" {
            return Err(
                "AWS_SNS_SMS_TYPE must be either 'Transactional' or 'Promotional'".to_string(),
            );
        }
        if self.default_country_code.is_empty()
            || !self.default_country_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err("SMS_DEFAULT_COUNTRY_CODE must contain only digits".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("aws-sns".parse::<SmsProvider>(), Ok(SmsProvider::AwsSns));
        assert_eq!("Mock".parse::<SmsProvider>(), Ok(SmsProvider::Mock));
        assert!("twilio".parse::<SmsProvider>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(SmsConfig::default().validate().is_ok());

        let config = SmsConfig {
            sms_type: "Marketing".to_string(),
            ..Default::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .contains("'Transactional' or 'Promotional'"));

        let config = SmsConfig {
            default_country_code: "+1".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
