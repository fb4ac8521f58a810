//! Core types, configuration, and logging setup for geostack.
//!
//! This crate provides the building blocks shared by the location model and
//! protocol crates: client configuration loaded from the environment, region
//! and endpoint resolution, and the tracing subscriber bootstrap.

mod config;
mod error;
mod logging;
mod types;

pub use config::ClientConfig;
pub use error::{CoreError, CoreResult};
pub use logging::{init_test_tracing, init_tracing};
pub use types::{AwsRegion, Endpoint};
