// ============================================================================
// SESIÓN SOCKET.IO - Máquina de estados del canal, sin I/O
// ============================================================================
// RealtimeChannel solo envía lo que esta sesión devuelve en `outgoing`
// ============================================================================

use crate::models::realtime::{PositionUpdate, ServerEvent, NEW_POSITION_EVENT};
use super::protocol::{self, Frame, CONNECT_FRAME, PONG_FRAME};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChannelPhase {
    /// Esperando el acuse `40{sid}`
    #[default]
    Connecting,
    Connected,
    /// Rechazado o cerrado; ya no se reconecta
    Closed,
}

/// Qué hacer tras procesar un frame entrante
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FrameReaction {
    /// Frames a enviar, en orden
    pub outgoing: Vec<String>,
    pub event: Option<ServerEvent>,
}

#[derive(Default, Debug)]
pub struct ChannelSession {
    phase: ChannelPhase,
    /// Emisiones hechas antes del primer acuse de conexión
    pending: Vec<String>,
}

impl ChannelSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ChannelPhase {
        self.phase
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pasa a `Closed` una sola vez; los buffers pendientes se pierden
    fn close(&mut self, reason: String) -> Option<ServerEvent> {
        if self.phase == ChannelPhase::Closed {
            return None;
        }
        self.phase = ChannelPhase::Closed;
        if !self.pending.is_empty() {
            log::warn!("⚠️ {} emisiones pendientes descartadas al cerrar el canal", self.pending.len());
            self.pending.clear();
        }
        Some(ServerEvent::Disconnected(reason))
    }

    /// Procesa un frame de texto recibido por el WebSocket
    pub fn on_text(&mut self, text: &str) -> FrameReaction {
        match protocol::decode(text) {
            Ok(frame) => self.on_frame(frame),
            Err(e) => {
                log::warn!("⚠️ Frame inválido ignorado ({}): {}", e, text);
                FrameReaction::default()
            }
        }
    }

    pub fn on_frame(&mut self, frame: Frame) -> FrameReaction {
        let mut reaction = FrameReaction::default();

        match frame {
            Frame::Open(info) => {
                log::debug!("Engine abierto sid={} ping={}ms", info.sid, info.ping_interval);
                reaction.outgoing.push(CONNECT_FRAME.to_string());
            }
            Frame::Ping => reaction.outgoing.push(PONG_FRAME.to_string()),
            Frame::Connected { sid } => {
                log::info!("🔌 Conectado al canal en tiempo real (sid: {})", sid.as_deref().unwrap_or("-"));
                self.phase = ChannelPhase::Connected;
                reaction.outgoing = std::mem::take(&mut self.pending);
                reaction.event = Some(ServerEvent::Connected);
            }
            Frame::ConnectError(reason) => {
                log::error!("❌ Conexión rechazada por el servidor: {}", reason);
                reaction.event = self.close(format!("conexão recusada: {}", reason));
            }
            Frame::Close | Frame::Disconnected => {
                log::warn!("⚠️ Servidor cerró el canal en tiempo real");
                reaction.event = self.close("servidor encerrou a conexão".to_string());
            }
            Frame::Event { name, payload } if name == NEW_POSITION_EVENT => {
                match serde_json::from_value::<PositionUpdate>(payload) {
                    Ok(update) => reaction.event = Some(ServerEvent::NewPosition(update)),
                    Err(e) => log::warn!("⚠️ Payload de {} inválido: {}", NEW_POSITION_EVENT, e),
                }
            }
            Frame::Event { name, .. } => log::debug!("Evento '{}' sin handler", name),
            Frame::Pong | Frame::Noop | Frame::Ignored => {}
        }

        reaction
    }

    /// El WebSocket se cerró (onclose)
    pub fn on_socket_closed(&mut self, code: u16) -> Option<ServerEvent> {
        log::warn!("⚠️ Canal en tiempo real cerrado (code {})", code);
        self.close(format!("conexão fechada (code {})", code))
    }

    /// Frame a enviar ya, o `None` si quedó en cola o se descartó
    pub fn queue_emit(&mut self, frame: String) -> Option<String> {
        match self.phase {
            ChannelPhase::Connected => Some(frame),
            ChannelPhase::Connecting => {
                log::info!("⏳ Canal sin conectar, emisión en cola");
                self.pending.push(frame);
                None
            }
            ChannelPhase::Closed => {
                log::warn!("⚠️ Canal cerrado, emisión descartada: {}", frame);
                None
            }
        }
    }
}
