//! Service layer for Construct.AI business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services can be used by the CLI or any other front end.

pub mod api;
pub mod upload;

pub use api::{analyze_video, list_projects, ServiceError};
pub use upload::{UploadEvent, UploadHandle, UploadSimulator};
