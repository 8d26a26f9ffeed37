//! HTTP client layer: `DharitriHttp`.

pub mod client;

pub use client::DharitriHttp;
