//! One-shot device location lookup.
//!
//! Unsupported or denied requests resolve to `None`; they are logged to the
//! console and never surfaced in the form.

#[cfg(feature = "web")]
mod browser;

#[cfg(feature = "web")]
pub use browser::BrowserGeolocation;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Decimal-degree position reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_text(&self) -> String {
        self.latitude.to_string()
    }

    pub fn longitude_text(&self) -> String {
        self.longitude.to_string()
    }
}

#[async_trait(?Send)]
pub trait GeolocationProvider {
    async fn current_position(&self) -> Option<Coordinates>;
}

/// Provider for builds without browser access
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGeolocation;

#[async_trait(?Send)]
impl GeolocationProvider for UnsupportedGeolocation {
    async fn current_position(&self) -> Option<Coordinates> {
        crate::console_log!("Geolocation not supported");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_text_keeps_precision() {
        let coords = Coordinates::new(-1.2728, 36.8356);
        assert_eq!(coords.latitude_text(), "-1.2728");
        assert_eq!(coords.longitude_text(), "36.8356");
        assert_eq!(Coordinates::new(0.0, 37.0).longitude_text(), "37");
    }

    #[tokio::test]
    async fn test_unsupported_provider_is_silent() {
        assert_eq!(UnsupportedGeolocation.current_position().await, None);
    }
}
