//! Shared types used across the plumber scheduling crates.

mod types;

pub use types::{AggregateId, Version};
