//! # LedgerSeed Shared Library
//!
//! Database access, record types and the seed orchestrator used by the
//! LedgerSeed API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing for seeded user accounts
//! - `db`: Connection pool, schema helpers and bulk insert sizing
//! - `models`: Seed record types and their tables
//! - `seed`: Seed orchestrator, placeholder datasets and error types

pub mod auth;
pub mod db;
pub mod models;
pub mod seed;

/// Current version of the LedgerSeed shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
