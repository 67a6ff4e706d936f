//! SMS Service Module
//!
//! This module provides SMS service implementations for sending verification
//! codes.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Logs and records messages for development
//! - **AWS SNS Support**: Production SMS via Amazon SNS
//! - **Destination formatting**: bare national numbers get the default country code

pub mod mock_sms;
pub mod sms_service;
pub mod sms_trait_adapter;

// AWS SNS SMS service (feature-gated)
#[cfg(feature = "aws-sns")]
pub mod aws_sns;

use std::sync::Arc;

use xerxes_shared::{SmsConfig, SmsProvider};

use crate::InfrastructureError;

// Re-export commonly used types
pub use mock_sms::{MockSmsService, SentSms};
pub use sms_service::SmsService;
pub use sms_trait_adapter::SmsServiceAdapter;

#[cfg(feature = "aws-sns")]
pub use aws_sns::AwsSnsSmsService;

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// A provider that cannot be initialized is an error; there is no silent
/// fallback to the mock provider.
pub async fn create_sms_service(config: &SmsConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    config.validate().map_err(InfrastructureError::Config)?;

    match config.provider {
        SmsProvider::Mock => {
            tracing::warn!("Using mock SMS service; messages are logged, not delivered");
            Ok(Arc::new(
                MockSmsService::new().with_country_code(config.default_country_code.clone()),
            ))
        }
        #[cfg(feature = "aws-sns")]
        SmsProvider::AwsSns => {
            let service = AwsSnsSmsService::new(config.clone()).await?;
            Ok(Arc::new(service))
        }
        #[cfg(not(feature = "aws-sns"))]
        SmsProvider::AwsSns => Err(InfrastructureError::Config(
            "SMS_PROVIDER=aws-sns requires the aws-sns feature".to_string(),
        )),
    }
}
