use std::rc::Rc;
use yew::prelude::*;
use crate::config::AppConfig;
use super::RouteDispatchPanel;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

/// Raíz de composición: inyecta la configuración a toda la vista
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <RouteDispatchPanel />
        </ContextProvider<Rc<AppConfig>>>
    }
}
