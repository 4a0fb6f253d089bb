pub mod protocol;
pub mod channel;
pub mod session;

use thiserror::Error;

pub use channel::{EventHandler, RealtimeChannel};
pub use protocol::ProtocolError;
pub use session::{ChannelPhase, ChannelSession, FrameReaction};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RealtimeError {
    #[error(transparent)]
    InvalidAddress(#[from] ProtocolError),
    #[error("WebSocket error: {0}")]
    Socket(String),
}

/// Anuncia al backend el arranque de una corrida.
///
/// Best effort: sin acuse ni reintentos.
pub trait DirectionEmitter {
    fn emit_new_direction(&self, route_id: &str);
}

/// Sin canal (falló la conexión) la emisión se descarta
impl<T: DirectionEmitter> DirectionEmitter for Option<T> {
    fn emit_new_direction(&self, route_id: &str) {
        match self {
            Some(emitter) => emitter.emit_new_direction(route_id),
            None => log::warn!("⚠️ Sin canal en tiempo real, new-direction para {} descartado", route_id),
        }
    }
}
