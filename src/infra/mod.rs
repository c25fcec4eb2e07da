//! Outbound integrations.

pub mod agents;
