use dioxus::prelude::*;

use crate::components::forms::{AddStageForm, RegisterForm};

#[component]
pub fn AddStagePage() -> Element {
    rsx! {
        main {
            class: "form-page",
            AddStageForm {}
        }
    }
}

#[component]
pub fn RegisterPage() -> Element {
    rsx! {
        main {
            class: "form-page",
            h1 { class: "page-title", "Jisajili" }
            RegisterForm {}
        }
    }
}
