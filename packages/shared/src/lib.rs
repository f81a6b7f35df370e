//! Shared utilities for Heya.

pub mod logger;
pub mod time;
