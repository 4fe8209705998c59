use crate::{Context, ProvideCredential, Result};
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider that yields a credential wins. Providers that error are
/// logged and skipped so a broken source never masks a working one later in
/// the chain.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Clone)]
    struct TestCredential(String);

    #[derive(Debug)]
    struct StaticProvider(&'static str);

    #[async_trait::async_trait]
    impl ProvideCredential for StaticProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(TestCredential(self.0.to_string())))
        }
    }

    #[derive(Debug)]
    struct EmptyProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for EmptyProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct FailProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for FailProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("this provider always fails"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() {
        let chain = ProvideCredentialChain::new()
            .push(FailProvider)
            .push(EmptyProvider)
            .push(StaticProvider("first"))
            .push(StaticProvider("second"));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .expect("chain must yield a credential");
        assert_eq!(cred.0, "first");
    }

    #[tokio::test]
    async fn test_chain_returns_none_when_exhausted() {
        let chain = ProvideCredentialChain::new()
            .push(FailProvider)
            .push(EmptyProvider);

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain: ProvideCredentialChain<TestCredential> = ProvideCredentialChain::new();

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert!(cred.is_none());
    }
}
