// ============================================================================
// USE ROUTE CATALOG - Carga única del catálogo al montar
// ============================================================================
// Sin reintentos: si falla, catálogo vacío + aviso no bloqueante
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::config::AppConfig;
use crate::models::{Notice, RouteCatalog};
use crate::services::ApiClient;
use crate::state::Loadable;

#[hook]
pub fn use_route_catalog(config: Rc<AppConfig>, on_notice: Callback<Notice>) -> UseStateHandle<Loadable<RouteCatalog>> {
    let catalog = use_state(Loadable::<RouteCatalog>::default);

    {
        let catalog = catalog.clone();
        let client = ApiClient::new(&config);

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.fetch_routes().await;
                if let Err(e) = &result {
                    log::error!("❌ Error cargando corridas: {}", e);
                    on_notice.emit(Notice::error(format!("Não foi possível carregar as corridas ({})", e)));
                }
                catalog.set(Loadable::from_result(result));
            });
            || ()
        });
    }

    catalog
}
