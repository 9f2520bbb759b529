//! Route handlers

pub mod health;
pub mod pages;
pub mod task;
