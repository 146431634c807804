mod forms_provider;
mod pages;

pub use forms_provider::FormsProvider;
pub use pages::{AddStagePage, RegisterPage};
