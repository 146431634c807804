//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: field error collection and shared field validators
//!
//! These utilities behave the same in the browser and in native unit tests.

pub mod console_macros;
pub mod validation;

pub use validation::*;
