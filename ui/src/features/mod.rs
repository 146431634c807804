//! Form state, validation and submit workflows, free of rendering code.

pub mod location;
pub mod member;
pub mod registration;
pub mod stage;
pub mod submission;
