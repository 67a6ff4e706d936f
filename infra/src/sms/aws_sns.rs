//! AWS SNS SMS Service Implementation
//!
//! Sends SMS through the SNS `Publish` API. Destinations are normalized with
//! the configured default country code before dispatch. Credentials come
//! from static keys when both are configured, otherwise from the default AWS
//! credential chain.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::{config::Region, types::MessageAttributeValue, Client as SnsClient};
use tracing::{debug, error, info};
use xerxes_shared::phone::{format_phone_number, is_valid_e164, mask_phone_number};
use xerxes_shared::SmsConfig;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// SNS limit for a single SMS publish
const MAX_MESSAGE_LENGTH: usize = 1600;

pub struct AwsSnsSmsService {
    client: SnsClient,
    config: SmsConfig,
}

impl AwsSnsSmsService {
    pub async fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        config.validate().map_err(InfrastructureError::Config)?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => {
                let credentials = aws_credential_types::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    "xerxes_static_credentials",
                );
                loader = loader.credentials_provider(credentials);
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(InfrastructureError::Config(
                    "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together".to_string(),
                ));
            }
            (None, None) => {
                debug!("No static AWS credentials configured, using the default provider chain");
            }
        }

        let aws_config = loader.load().await;
        let client = SnsClient::new(&aws_config);

        info!(
            "AWS SNS SMS service initialized for region: {}",
            config.region
        );
        if let Some(ref sender_id) = config.sender_id {
            info!("Using sender ID: {}", sender_id);
        }

        Ok(Self { client, config })
    }

    fn normalize_phone_number(&self, phone: &str) -> Result<String, InfrastructureError> {
        let formatted = format_phone_number(phone, &self.config.default_country_code);
        if is_valid_e164(&formatted) {
            Ok(formatted)
        } else {
            Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(&formatted)
            )))
        }
    }

    fn create_sms_attributes(&self) -> Result<HashMap<String, MessageAttributeValue>, InfrastructureError> {
        let mut attributes = HashMap::new();

        attributes.insert(
            "AWS.SNS.SMS.SMSType".to_string(),
            string_attribute(&self.config.sms_type)?,
        );

        // Sender ID is not supported in all regions
        if let Some(ref sender_id) = self.config.sender_id {
            attributes.insert(
                "AWS.SNS.SMS.SenderID".to_string(),
                string_attribute(sender_id)?,
            );
        }

        Ok(attributes)
    }
}

fn string_attribute(value: &str) -> Result<MessageAttributeValue, InfrastructureError> {
    MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()
        .map_err(|e| InfrastructureError::Sms(format!("Invalid SNS message attribute: {}", e)))
}

#[async_trait]
impl SmsService for AwsSnsSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = self.normalize_phone_number(phone_number)?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        debug!(
            "Sending SMS to {} via AWS SNS (message length: {} chars)",
            mask_phone_number(&to),
            message.len()
        );

        let response = self
            .client
            .publish()
            .phone_number(&to)
            .message(message)
            .set_message_attributes(Some(self.create_sms_attributes()?))
            .send()
            .await
            .map_err(|e| {
                error!(
                    "Failed to send SMS to {} via AWS SNS: {}",
                    mask_phone_number(&to),
                    e
                );
                InfrastructureError::Sms(format!("Failed to send SMS via AWS SNS: {}", e))
            })?;

        let message_id = response.message_id().unwrap_or("unknown").to_string();
        info!(
            "SMS sent successfully to {} via AWS SNS with message ID: {}",
            mask_phone_number(&to),
            message_id
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "AWS SNS"
    }

    async fn is_available(&self) -> bool {
        match self.client.get_sms_attributes().send().await {
            Ok(_) => true,
            Err(e) => {
                error!("AWS SNS availability check failed: {}", e);
                false
            }
        }
    }
}
