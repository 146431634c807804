pub mod form_validation;
pub mod types;
pub mod workflow;

pub use form_validation::*;
pub use types::*;
pub use workflow::{capture_stage_location, submit_stage};
