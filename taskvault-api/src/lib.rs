//! # TaskVault API Server Library
//!
//! HTTP surface for TaskVault: user registration and login, account status,
//! and per-user task management. The business and data layers live in
//! `taskvault-shared`; this crate owns the transport concerns.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: environment configuration
//! - `error`: error handling and HTTP response mapping
//! - `response`: the success envelope
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;
