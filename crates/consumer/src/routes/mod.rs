//! HTTP route handlers.

pub mod consumer;
pub mod health;
pub mod metrics;
