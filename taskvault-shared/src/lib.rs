//! # TaskVault Shared Library
//!
//! This crate contains the domain layer shared by the TaskVault API server:
//! database access, repositories, business services, and authentication
//! primitives. The HTTP layer lives in `taskvault-api` and only talks to the
//! service types exported here.
//!
//! ## Module Organization
//!
//! - `db`: connection pool, readiness wait, and schema bootstrap
//! - `models`: row types and write inputs for users and tasks
//! - `repos`: SQL statements and the repository error taxonomy
//! - `services`: business rules and the domain error taxonomy
//! - `auth`: password hashing, JWT issue/verify, and the request auth context
//!
//! Errors are re-typed at each layer boundary: `sqlx::Error` never leaves
//! `repos`, `RepoError` passes through `services` unchanged next to the
//! business error kinds, and only the API crate knows HTTP status codes.

pub mod auth;
pub mod db;
pub mod models;
pub mod repos;
pub mod services;

/// Current version of the TaskVault shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
