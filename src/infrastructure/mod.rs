//! Infrastructure layer module
//!
//! Adapters to the outside world:
//! - AWS Bedrock completion client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod bedrock;
pub mod config;
pub mod logging;
