//! Dioxus components for the stage and rider forms.
//!
//! - **forms**: the stage, member and rider registration forms
//! - **input**: controlled text, select and checkbox fields with inline errors
//! - **display**: outcome messages, the pending indicator and the modal

pub mod display;
pub mod forms;
pub mod input;
