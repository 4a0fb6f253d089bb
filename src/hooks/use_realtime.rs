// ============================================================================
// USE REALTIME - Canal Socket.IO de la vista
// ============================================================================
// El handler de eventos se refresca en cada render (siempre ve el estado actual)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use crate::models::ServerEvent;
use crate::services::RealtimeChannel;
use crate::state::Loadable;

#[derive(Clone)]
pub struct UseRealtimeHandle {
    pub channel: Rc<RefCell<Option<RealtimeChannel>>>,
    /// `Ready` tras el acuse de conexión, `Failed` si se rechaza o se cierra
    pub status: UseStateHandle<Loadable<()>>,
}

#[hook]
pub fn use_realtime(backend_address: String, on_event: Callback<ServerEvent>) -> UseRealtimeHandle {
    let channel = use_mut_ref(|| None::<RealtimeChannel>);
    let status = use_state(Loadable::<()>::default);

    let latest_handler = use_mut_ref(Callback::<ServerEvent>::noop);
    *latest_handler.borrow_mut() = on_event;

    {
        let channel = channel.clone();
        let status = status.clone();

        use_effect_with((), move |_| {
            let handler = {
                let status = status.clone();
                Rc::new(move |event: ServerEvent| {
                    match &event {
                        ServerEvent::Connected => status.set(Loadable::Ready(())),
                        ServerEvent::Disconnected(reason) => status.set(Loadable::Failed(reason.clone())),
                        ServerEvent::NewPosition(_) => {}
                    }
                    let callback = latest_handler.borrow().clone();
                    callback.emit(event);
                })
            };

            match RealtimeChannel::connect(&backend_address, handler) {
                Ok(connected) => *channel.borrow_mut() = Some(connected),
                Err(e) => {
                    log::error!("❌ No se pudo abrir el canal en tiempo real: {}", e);
                    status.set(Loadable::Failed(e.to_string()));
                }
            }
            || ()
        });
    }

    UseRealtimeHandle { channel, status }
}
