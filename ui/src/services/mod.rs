//! Infrastructure Services
//!
//! - **actions**: server-side stage, registration and member actions over HTTP
//! - **config**: API endpoints and post-submit routes
//! - **errors**: common error type for the forms
//! - **geolocation**: one-shot device location requests
//! - **navigation**: client-side redirects
//!
//! The services are WASM-first, using browser APIs and async traits
//! without Send/Sync bounds.

pub mod actions;
pub mod config;
pub mod errors;
pub mod geolocation;
pub mod navigation;
