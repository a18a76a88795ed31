//! Shared utilities for Huddle packages.

pub mod logger;
pub mod time;
