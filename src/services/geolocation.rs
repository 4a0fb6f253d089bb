// ============================================================================
// GEOLOCALIZACIÓN - navigator.geolocation.getCurrentPosition como future
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use crate::models::Position;
use crate::utils::map_ffi::describe_js_error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available in this browser")]
    Unavailable,
    #[error("geolocation request failed: {0}")]
    Denied(String),
}

fn read_f64(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

/// Posición actual del usuario (pide permiso si hace falta)
pub async fn current_position(high_accuracy: bool) -> Result<Position, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unavailable)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unavailable)?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(high_accuracy);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| GeolocationError::Denied(describe_js_error(&e)))?;

    let coords = js_sys::Reflect::get(&result, &JsValue::from_str("coords"))
        .map_err(|_| GeolocationError::Denied("position without coords".to_string()))?;
    match (read_f64(&coords, "latitude"), read_f64(&coords, "longitude")) {
        (Some(lat), Some(lng)) => {
            log::info!("📍 Geolocalización obtenida: ({}, {})", lat, lng);
            Ok(Position::new(lat, lng))
        }
        _ => Err(GeolocationError::Denied("position without latitude/longitude".to_string())),
    }
}
