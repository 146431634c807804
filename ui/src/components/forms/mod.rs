pub mod add_member_form;
pub mod add_stage_form;
pub mod location_selector;
pub mod register_form;
pub mod rider_type_selector;

pub use add_member_form::*;
pub use add_stage_form::*;
pub use location_selector::*;
pub use register_form::*;
pub use rider_type_selector::*;
