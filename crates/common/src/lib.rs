//! Shared types for the consumer service.

pub mod types;

pub use types::{Environment, TenantId};
