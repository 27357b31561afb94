//! Per-resource operations on `ApiClient`
//!
//! Each module adds one resource's operations as inherent methods. Every
//! operation is a single stateless request/response round trip; the only
//! shared pieces are the configured client and the media/normalization
//! helpers.

pub mod enrollments;
pub mod learning_plans;
pub mod posts;
pub mod progress_updates;
pub mod users;
