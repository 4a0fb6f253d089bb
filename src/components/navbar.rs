use yew::prelude::*;

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    html! {
        <header class="app-bar">
            <div class="toolbar">
                <span class="toolbar-icon" aria-label="menu">{"🚗"}</span>
                <h1 class="toolbar-title">{"Code Delivery"}</h1>
            </div>
        </header>
    }
}
