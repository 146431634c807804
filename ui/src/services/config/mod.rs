//! Application configuration for the registration forms.

use serde::{Deserialize, Serialize};

use crate::console_warn;
use crate::services::errors::{FormError, FormResult};

const FALLBACK_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub routes: RouteConfig,
}

/// Where the server-side actions live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub stages_path: String,
    pub register_path: String,
    pub members_path: String,
}

/// Client-side destinations after a successful submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub profile: String,
    pub login: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: FALLBACK_BASE_URL.to_string(),
            stages_path: "/api/stages".to_string(),
            register_path: "/api/register".to_string(),
            members_path: "/api/members".to_string(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            profile: "/profile".to_string(),
            login: "/login".to_string(),
        }
    }
}

impl ApiConfig {
    /// Join the base URL and an endpoint path without doubling slashes
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl AppConfig {
    /// Same-origin configuration for the browser, falling back to defaults
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());

        match origin {
            Some(origin) => Self::with_base_url(origin).unwrap_or_else(|e| {
                console_warn!("[Config] {} - using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> FormResult<Self> {
        let config = Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
            routes: RouteConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FormResult<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FormError::Configuration {
                field: "api.base_url".to_string(),
                value: self.api.base_url.clone(),
            });
        }

        let paths = [
            ("api.stages_path", &self.api.stages_path),
            ("api.register_path", &self.api.register_path),
            ("api.members_path", &self.api.members_path),
            ("routes.profile", &self.routes.profile),
            ("routes.login", &self.routes.login),
        ];
        for (field, value) in paths {
            if !value.starts_with('/') {
                return Err(FormError::Configuration {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
