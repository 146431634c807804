//! Browser geolocation through `navigator.geolocation.getCurrentPosition`

use async_trait::async_trait;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::{Coordinates, GeolocationProvider};
use crate::services::errors::{FormError, FormResult};
use crate::{console_log, console_warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocation;

impl BrowserGeolocation {
    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|w| Reflect::has(&w.navigator(), &JsValue::from_str("geolocation")).unwrap_or(false))
            .unwrap_or(false)
    }

    async fn request_position() -> FormResult<Coordinates> {
        if !Self::is_supported() {
            return Err(FormError::GeolocationUnsupported);
        }

        let window = web_sys::window().ok_or(FormError::GeolocationUnsupported)?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| FormError::GeolocationUnsupported)?;

        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        let position = JsFuture::from(promise)
            .await
            .map_err(|e| FormError::Geolocation {
                message: format!("{:?}", e),
            })?;

        let coords = read_property(&position, "coords")?;
        let latitude = read_number(&coords, "latitude")?;
        let longitude = read_number(&coords, "longitude")?;

        Ok(Coordinates::new(latitude, longitude))
    }
}

fn read_property(target: &JsValue, key: &str) -> FormResult<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| FormError::Geolocation {
        message: format!("missing {}: {:?}", key, e),
    })
}

fn read_number(target: &JsValue, key: &str) -> FormResult<f64> {
    read_property(target, key)?
        .as_f64()
        .ok_or_else(|| FormError::Geolocation {
            message: format!("{} is not a number", key),
        })
}

#[async_trait(?Send)]
impl GeolocationProvider for BrowserGeolocation {
    async fn current_position(&self) -> Option<Coordinates> {
        match Self::request_position().await {
            Ok(coords) => Some(coords),
            Err(FormError::GeolocationUnsupported) => {
                console_log!("Geolocation not supported");
                None
            }
            Err(e) => {
                console_warn!("[Geolocation] {}", e);
                None
            }
        }
    }
}
