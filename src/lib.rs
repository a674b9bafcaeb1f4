//! Stockroom - a small read-only catalog HTTP service
//!
//! Stockroom serves a catalog of items over HTTP:
//! - Source of truth is a static JSON file, re-read on every request
//! - Optional PostgreSQL persistence, seeded once from the file at startup
//! - Reads degrade gracefully: database, then file, then empty

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod types;

pub use error::{Error, Result};
