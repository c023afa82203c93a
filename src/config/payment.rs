//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Polka billing webhooks)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Key Polka presents as `Authorization: ApiKey <key>`.
    /// Webhooks are accepted without a key when unset.
    pub polka_api_key: Option<SecretString>,
}

impl PaymentConfig {
    /// Check if webhook requests must be authenticated
    pub fn requires_webhook_key(&self) -> bool {
        self.polka_api_key.is_some()
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.polka_api_key {
            if key.expose_secret().trim().is_empty() {
                return Err(ValidationError::EmptyWebhookKey);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_is_valid() {
        let config = PaymentConfig::default();
        assert!(!config.requires_webhook_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let config = PaymentConfig {
            polka_api_key: Some(SecretString::new("  ".to_string())),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyWebhookKey));
    }
}
