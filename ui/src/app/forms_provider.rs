use dioxus::prelude::*;

use crate::services::actions::HttpFormActions;
use crate::services::config::AppConfig;
use crate::{console_error, console_info};

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

#[derive(Props, PartialEq, Clone)]
pub struct FormsProviderProps {
    pub config: AppConfig,
    pub children: Element,
}

/// Shares the configuration and the action client with every form below it
#[component]
pub fn FormsProvider(props: FormsProviderProps) -> Element {
    let config = props.config.clone();

    use_hook(|| {
        if let Err(e) = config.validate() {
            console_error!("[Config] Invalid configuration: {}", e);
        } else {
            console_info!("[Config] Actions served from {}", config.api.base_url);
        }
    });

    let provided = config.clone();
    use_context_provider(move || provided);
    use_context_provider(move || HttpFormActions::new(config.api.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        {props.children}
    }
}
