//! services/api/src/lib.rs
//!
//! The portfolio API service: storage and provider adapters, configuration,
//! and the axum web layer. The `api` binary wires them together.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
