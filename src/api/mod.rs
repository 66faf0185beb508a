//! REST backend access
//!
//! This module handles all communication with the catalog backend:
//! - Request construction and the four CRUD operations (client.rs)
//!
//! Everything past the toast contract is intentionally opaque: callers
//! only ever see the generic [`client::ApiError`].

pub mod client;

pub use client::{ApiClient, ApiError};
