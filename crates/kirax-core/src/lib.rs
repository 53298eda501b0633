//! Core domain for the Kirax chat console.
//!
//! This crate holds the pure domain layer: errors, subscription plans,
//! specialist personas, the model catalog selection logic, and the
//! per-session conversation state. It has no I/O: HTTP, secret files,
//! and PDF parsing live in the `kirax-interaction` and
//! `kirax-infrastructure` crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod persona;
pub mod plan;
pub mod session;

// Re-export common error type
pub use error::{KiraxError, Result};
