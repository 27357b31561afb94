//! Treble API Client Library
//!
//! Async client for the Treble music-learning platform REST backend.
//! Exposes CRUD operations over learning plans, enrollments, users, posts,
//! and progress updates, plus media URL resolution and response-shape
//! normalization applied consistently after every fetch.

pub mod api;
pub mod config;
pub mod error;
pub mod http_client;
pub mod media;
pub mod models;
pub mod session;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http_client::ApiClient;
pub use media::resolve_media_url;
pub use models::{
    normalize_progress_update, Enrollment, LearningPlan, MediaUpload, Post, ProgressUpdate, User,
};
pub use api::progress_updates::ProgressUpdateDraft;
pub use session::Session;
