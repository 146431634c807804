//! Stage and rider registration forms for the boda-boda web app.

pub mod app;
pub use app::{AddStagePage, FormsProvider, RegisterPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
