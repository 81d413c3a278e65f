//! API Client
//!
//! Fetch wrappers for the customer API.

pub mod client;

pub use client::*;
