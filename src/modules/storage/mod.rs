//! Storage module for file management
//!
//! Provides a local-disk file store for uploaded videos. Files are addressed
//! by their upload filename and served back statically.

mod local_store;

pub use local_store::LocalFileStore;
