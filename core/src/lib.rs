//! Core components for presigned URL generation.
//!
//! This crate provides the foundational types and traits for logsign. It is
//! deliberately free of I/O: signing is a pure transformation over its inputs,
//! and the only environmental capability exposed to credential providers is
//! variable access through [`Context`].
//!
//! ## Overview
//!
//! - **Context**: a container holding the environment implementation used by
//!   credential providers
//! - **Traits**: [`ProvideCredential`] for loading credentials and
//!   [`SignRequest`] for building service-specific signed requests
//! - **Signer**: the orchestrator coordinating credential loading and signing
//!
//! Service crates implement the traits. See `logsign-rds` for the signer that
//! presigns RDS log file downloads.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
