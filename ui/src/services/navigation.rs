//! Client-side redirects after a successful submission

use dioxus::router::prelude::Navigator;

use crate::{console_info, console_warn};

pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

impl Navigate for Navigator {
    fn navigate_to(&self, path: &str) {
        console_info!("[Navigation] Redirecting to {}", path);
        if self.push(path.to_string()).is_some() {
            console_warn!("[Navigation] Redirect to {} failed", path);
        }
    }
}
