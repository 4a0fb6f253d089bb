// ============================================================================
// MAP FFI - Puente hacia static/map_bridge.js
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Inyecta el SDK del proveedor de mapas; resuelve cuando está listo
    #[wasm_bindgen(js_name = loadMapLibrary)]
    pub fn load_map_library(api_key: &str) -> js_sys::Promise;

    /// Crea el mapa en el contenedor y devuelve un handle opaco
    #[wasm_bindgen(catch, js_name = createMap)]
    pub fn create_map(container_id: &str, lat: f64, lng: f64, zoom: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = addRouteMarkers)]
    pub fn add_route_markers(map: &JsValue, route_id: &str, markers_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = moveVehicleMarker)]
    pub fn move_vehicle_marker(map: &JsValue, route_id: &str, lat: f64, lng: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = removeRouteMarkers)]
    pub fn remove_route_markers(map: &JsValue, route_id: &str) -> Result<(), JsValue>;
}

/// Texto legible de un error lanzado desde JS
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
