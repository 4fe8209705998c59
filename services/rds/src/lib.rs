//! RDS log download presigner.
//!
//! Produces presigned, time-limited URLs for the RDS `downloadCompleteLogFile`
//! API using SigV4 query signing. The resulting URL embeds every
//! authentication parameter, so an unauthenticated HTTPS GET fetches the log
//! file until the expiry window closes.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod logfile;
pub use logfile::log_file_request;

mod provide_credential;
pub use provide_credential::ConfigCredentialProvider;
pub use provide_credential::DefaultCredentialProvider;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::RequestSigner;
pub use sign_request::DEFAULT_EXPIRES_IN;

mod constants;
pub use constants::EMPTY_STRING_SHA256;
