use boda_ui::services::config::AppConfig;
use boda_ui::{AddStagePage, FormsProvider, RegisterPage};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::from_window);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Boda Boda Registration" }

        FormsProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/add-stage")]
    AddStage {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/login")]
    Login {},
}

#[component]
fn Home() -> Element {
    rsx! {
        main {
            class: "landing",
            h1 { "Boda Boda Registration" }
            nav {
                class: "landing-links",
                Link { to: Route::Register {}, "Register as a rider" }
                Link { to: Route::AddStage {}, "Add your stage" }
            }
        }
    }
}

#[component]
fn AddStage() -> Element {
    rsx! { AddStagePage {} }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterPage {} }
}

// Profile and login live on the server-rendered side; these only land the redirect
#[component]
fn Profile() -> Element {
    rsx! {
        main {
            class: "landing",
            h1 { "Profile" }
            p { "Your stage has been saved." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        main {
            class: "landing",
            h1 { "Login" }
            p { "Your account is ready. Sign in to continue." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
