use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::models::realtime::{NewDirection, ServerEvent, NEW_DIRECTION_EVENT};
use crate::utils::map_ffi::describe_js_error;
use super::protocol;
use super::session::{ChannelSession, FrameReaction};
use super::{DirectionEmitter, RealtimeError};

pub type EventHandler = Rc<dyn Fn(ServerEvent)>;

/// Conexión Socket.IO de la vista (una por página)
pub struct RealtimeChannel {
    ws: web_sys::WebSocket,
    session: Rc<RefCell<ChannelSession>>,
}

fn send_frame(ws: &web_sys::WebSocket, frame: &str) {
    if let Err(e) = ws.send_with_str(frame) {
        log::error!("❌ Error enviando frame '{}': {}", frame, describe_js_error(&e));
    }
}

/// El borrow de la sesión ya se soltó: `on_event` puede volver a emitir
fn apply_reaction(ws: &web_sys::WebSocket, on_event: &EventHandler, reaction: FrameReaction) {
    for frame in &reaction.outgoing {
        send_frame(ws, frame);
    }
    if let Some(event) = reaction.event {
        on_event(event);
    }
}

impl RealtimeChannel {
    /// Abre el WebSocket; el acuse de conexión llega de forma asíncrona
    pub fn connect(backend_address: &str, on_event: EventHandler) -> Result<Self, RealtimeError> {
        let url = protocol::socket_url(backend_address)?;
        log::info!("🔌 Conectando a {}", url);

        let ws = web_sys::WebSocket::new(&url).map_err(|e| RealtimeError::Socket(describe_js_error(&e)))?;
        let session = Rc::new(RefCell::new(ChannelSession::new()));

        {
            let ws_handle = ws.clone();
            let session = session.clone();
            let on_event = on_event.clone();
            let onmessage = Closure::wrap(Box::new(move |e: web_sys::MessageEvent| {
                match e.data().as_string() {
                    Some(text) => {
                        let reaction = session.borrow_mut().on_text(&text);
                        apply_reaction(&ws_handle, &on_event, reaction);
                    }
                    None => log::debug!("Mensaje binario ignorado"),
                }
            }) as Box<dyn FnMut(web_sys::MessageEvent)>);
            ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
            onmessage.forget();
        }

        {
            let onerror = Closure::wrap(Box::new(move |e: web_sys::ErrorEvent| {
                log::error!("❌ Error en el canal en tiempo real: {}", e.message());
            }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
            ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();
        }

        {
            let session = session.clone();
            let onclose = Closure::wrap(Box::new(move |e: web_sys::CloseEvent| {
                let event = session.borrow_mut().on_socket_closed(e.code());
                if let Some(event) = event {
                    on_event(event);
                }
            }) as Box<dyn FnMut(web_sys::CloseEvent)>);
            ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
            onclose.forget();
        }

        Ok(Self { ws, session })
    }
}

impl DirectionEmitter for RealtimeChannel {
    fn emit_new_direction(&self, route_id: &str) {
        let payload = NewDirection { route_id: route_id.to_string() };
        let frame = match protocol::encode_event(NEW_DIRECTION_EVENT, &payload) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("❌ No se pudo codificar {}: {}", NEW_DIRECTION_EVENT, e);
                return;
            }
        };

        let ready = self.session.borrow_mut().queue_emit(frame);
        if let Some(frame) = ready {
            send_frame(&self.ws, &frame);
            log::info!("📤 {} emitido para {}", NEW_DIRECTION_EVENT, route_id);
        }
    }
}

impl Drop for RealtimeChannel {
    fn drop(&mut self) {
        if let Err(e) = self.ws.close() {
            log::warn!("⚠️ Error cerrando el WebSocket: {}", describe_js_error(&e));
        }
    }
}
