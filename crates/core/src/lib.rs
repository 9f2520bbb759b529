//! Core library for ticklist
//!
//! This crate contains the core business logic, including:
//! - Task model and status state machine
//! - Durable task storage

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
