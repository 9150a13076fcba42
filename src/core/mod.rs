//! Core library components.
//!
//! This module contains the reusable business logic for manifest loading,
//! reference resolution, and .env rendering.

pub mod config;
pub mod manifest;
pub mod reference;
pub mod render;
pub mod resolve;
pub mod vault;
pub mod walk;
