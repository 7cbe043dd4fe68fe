//! HTTP networking module
//!
//! Provides the pooled HTTP client used for every outbound call.

mod client;

pub use client::HttpClient;
