//! HTTP API Client
//!
//! Typed functions for the SUP REST API.

pub mod client;

pub use client::*;
