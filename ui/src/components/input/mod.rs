//! Controlled form inputs. Each one renders its label, the control and the
//! inline error for a single field.

pub mod checkbox_input;
pub mod select_input;
pub mod validated_input;

pub use checkbox_input::*;
pub use select_input::*;
pub use validated_input::*;
