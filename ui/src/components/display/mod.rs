pub mod form_message;
pub mod modal;
pub mod pending_indicator;

pub use form_message::*;
pub use modal::*;
pub use pending_indicator::*;
