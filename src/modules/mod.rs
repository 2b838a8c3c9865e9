//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for storage outside the database.

pub mod storage;
