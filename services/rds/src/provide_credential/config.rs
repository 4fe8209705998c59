use crate::{Config, Credential};
use async_trait::async_trait;
use logsign_core::{Context, ProvideCredential, Result};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// ConfigCredentialProvider loads credentials from an explicit [`Config`].
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { config: cfg }
    }
}

impl Debug for ConfigCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigCredentialProvider").finish()
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(ak), Some(sk)) = (&self.config.access_key_id, &self.config.secret_access_key)
        else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id: ak.clone(),
            secret_access_key: sk.clone(),
            session_token: self.config.session_token.clone(),
            expires_in: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_credential_provider() -> anyhow::Result<()> {
        let cfg = Config {
            access_key_id: Some("config_access_key".to_string()),
            secret_access_key: Some("config_secret_key".to_string()),
            ..Default::default()
        };

        let provider = ConfigCredentialProvider::new(Arc::new(cfg));
        let cred = provider.provide_credential(&Context::new()).await?.unwrap();
        assert_eq!(cred.access_key_id, "config_access_key");
        assert_eq!(cred.secret_access_key, "config_secret_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_credential_provider_incomplete() -> anyhow::Result<()> {
        let cfg = Config {
            access_key_id: Some("config_access_key".to_string()),
            ..Default::default()
        };

        let provider = ConfigCredentialProvider::new(Arc::new(cfg));
        let cred = provider.provide_credential(&Context::new()).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
