// ============================================================================
// EVENTOS DEL CANAL EN TIEMPO REAL
// ============================================================================

use serde::{Deserialize, Serialize};
use super::route::Position;

pub const NEW_DIRECTION_EVENT: &str = "new-direction";
pub const NEW_POSITION_EVENT: &str = "new-position";

/// Payload de `new-direction`: pide al backend que arranque la corrida
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewDirection {
    pub route_id: String,
}

/// Payload de `new-position`: posición actual del vehículo de una corrida
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    pub route_id: String,
    pub position: [f64; 2], // [lat, lng]
    #[serde(default)]
    pub finished: bool,
}

impl PositionUpdate {
    pub fn position(&self) -> Position {
        Position::from(self.position)
    }
}

/// Eventos entrantes que la vista sabe procesar
#[derive(Clone, PartialEq, Debug)]
pub enum ServerEvent {
    Connected,
    /// Conexión rechazada o cerrada; el motivo va al indicador de estado
    Disconnected(String),
    NewPosition(PositionUpdate),
}
