//! Middleware module for the API.

pub mod cors;
pub mod rate_limit;
