// ============================================================================
// USE MAP SURFACE - Librería de mapas + geolocalización al montar
// ============================================================================
// Si cualquiera de las dos falla el mapa no se crea (estado degradado)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use crate::config::AppConfig;
use crate::maps::WebMapSurface;
use crate::state::Loadable;

#[derive(Clone)]
pub struct UseMapSurfaceHandle {
    pub surface: Rc<RefCell<Option<WebMapSurface>>>,
    pub status: UseStateHandle<Loadable<()>>,
}

#[hook]
pub fn use_map_surface(config: Rc<AppConfig>) -> UseMapSurfaceHandle {
    let surface = use_mut_ref(|| None::<WebMapSurface>);
    let status = use_state(Loadable::<()>::default);

    {
        let surface = surface.clone();
        let status = status.clone();

        // Corre después del primer render: el <div id="map"> ya existe
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match WebMapSurface::load(&config).await {
                    Ok(loaded) => {
                        *surface.borrow_mut() = Some(loaded);
                        status.set(Loadable::Ready(()));
                    }
                    Err(e) => {
                        log::error!("❌ Mapa no disponible: {}", e);
                        status.set(Loadable::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    UseMapSurfaceHandle { surface, status }
}
