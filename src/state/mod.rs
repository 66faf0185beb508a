//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures (data.rs)
//! - The create/edit form workflow (form.rs)
//! - The product list workflow (products.rs)
//!
//! Everything in here is plain state and decision logic, free of any
//! iced types, so the contracts are unit-testable without a UI.

pub mod data;
pub mod form;
pub mod products;
