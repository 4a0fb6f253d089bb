// ============================================================================
// ROUTE DISPATCH PANEL - Vista "Mapping"
// ============================================================================
// Tres inicializaciones independientes al montar (canal, catálogo, mapa)
// + formulario de selección que delega el flujo al DispatchViewModel
// ============================================================================

use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use crate::config::AppConfig;
use crate::hooks::{use_map_surface, use_notices, use_realtime, use_route_catalog};
use crate::models::{RouteCatalog, Selection, ServerEvent};
use crate::state::Loadable;
use crate::utils::MAP_CONTAINER_ID;
use crate::viewmodels::DispatchViewModel;
use super::{NavigationBar, NoticeStack};

#[function_component(RouteDispatchPanel)]
pub fn route_dispatch_panel() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let notices = use_notices();
    let catalog = use_route_catalog(config.clone(), notices.push.clone());
    let map = use_map_surface(config.clone());
    let selection = use_state(Selection::default);
    let fault = use_state(|| None::<String>);
    let viewmodel = use_mut_ref(DispatchViewModel::new);

    // new-position: mover vehículo / liberar corrida terminada
    let on_server_event = {
        let catalog = catalog.clone();
        let surface = map.surface.clone();
        let push = notices.push.clone();
        Callback::from(move |event: ServerEvent| {
            let ServerEvent::NewPosition(update) = event else {
                return;
            };
            let mut surface = surface.borrow_mut();
            let Some(surface) = surface.as_mut() else {
                log::debug!("Posición de {} recibida antes de que el mapa esté listo", update.route_id);
                return;
            };

            let empty = RouteCatalog::default();
            let routes = catalog.ready().unwrap_or(&empty);
            match DispatchViewModel::apply_position_update(routes, surface, &update) {
                Ok(Some(notice)) => push.emit(notice),
                Ok(None) => {}
                Err(e) => log::error!("❌ Error aplicando posición de {}: {}", update.route_id, e),
            }
        })
    };
    let realtime = use_realtime(config.backend_address.clone(), on_server_event);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selection.set(Selection::from_control_value(&select.value()));
        })
    };

    let on_submit = {
        let catalog = catalog.clone();
        let selection = selection.clone();
        let surface = map.surface.clone();
        let channel = realtime.channel.clone();
        let viewmodel = viewmodel.clone();
        let push = notices.push.clone();
        let fault = fault.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let empty = RouteCatalog::default();
            let routes = catalog.ready().unwrap_or(&empty);
            let mut surface = surface.borrow_mut();
            let result = viewmodel.borrow_mut().start_route(
                routes,
                &selection,
                surface.as_mut(),
                &*channel.borrow(),
                &mut rand::thread_rng(),
            );

            match result {
                Ok(outcome) => {
                    if let Some(notice) = outcome.notice() {
                        push.emit(notice);
                    }
                }
                Err(e) => {
                    log::error!("💥 {}", e);
                    fault.set(Some(e.to_string()));
                }
            }
        })
    };

    let map_ready = map.status.is_ready();
    let map_status = match &*map.status {
        Loadable::Pending => html! { <p class="map-status">{"Carregando mapa..."}</p> },
        Loadable::Failed(reason) => html! {
            <p class="map-status error">{format!("Mapa indisponível: {}", reason)}</p>
        },
        Loadable::Ready(_) => html! {},
    };
    let (realtime_class, realtime_label) = match &*realtime.status {
        Loadable::Pending => ("realtime-status pending", "Conectando..."),
        Loadable::Ready(_) => ("realtime-status connected", "Conectado"),
        Loadable::Failed(_) => ("realtime-status offline", "Sem conexão"),
    };

    let selected_id = selection.control_value().to_string();
    let empty = RouteCatalog::default();
    let routes = catalog.ready().unwrap_or(&empty);

    let body = if let Some(reason) = (*fault).clone() {
        html! {
            <div class="fatal-error" role="alert">
                <strong>{"Erro inesperado no mapa"}</strong>
                <p>{reason}</p>
            </div>
        }
    } else {
        html! {
            <form class="dispatch-form" onsubmit={on_submit}>
                <select class="route-select" onchange={on_select} disabled={!map_ready}>
                    <option value="" selected={selected_id.is_empty()}>{"Selecione uma corrida"}</option>
                    { for routes.iter().enumerate().map(|(index, route)| html! {
                        <option key={index} value={route.id.clone()} selected={route.id == selected_id}>
                            {route.title.clone()}
                        </option>
                    }) }
                </select>
                {map_status}
                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled={!map_ready}>
                        {"Iniciar uma corrida"}
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <div class="mapping">
            <aside class="mapping-sidebar">
                <NavigationBar />
                {body}
                <span class={realtime_class}>{realtime_label}</span>
            </aside>
            <main class="mapping-map">
                <div id={MAP_CONTAINER_ID} class="map-canvas" />
            </main>
            <NoticeStack entries={notices.entries.clone()} on_dismiss={notices.dismiss.clone()} />
        </div>
    }
}
