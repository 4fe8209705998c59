use crate::constants::*;
use logsign_core::Context;

/// Config carries all the configuration for RDS log presigning.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Config {
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    pub session_token: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AWS_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (AWS_REGION.to_string(), "us-east-1".to_string()),
                (AWS_ACCESS_KEY_ID.to_string(), "env_access_key".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "env_secret_key".to_string(),
                ),
            ]),
        });

        let cfg = Config::default().from_env(&ctx);
        assert_eq!(cfg.region, Some("us-east-1".to_string()));
        assert_eq!(cfg.access_key_id, Some("env_access_key".to_string()));
        assert_eq!(cfg.secret_access_key, Some("env_secret_key".to_string()));
        assert_eq!(cfg.session_token, None);
    }

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(
                AWS_ACCESS_KEY_ID.to_string(),
                "env_access_key".to_string(),
            )]),
        });

        let cfg = Config {
            access_key_id: Some("explicit_access_key".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(cfg.access_key_id, Some("explicit_access_key".to_string()));
    }
}
