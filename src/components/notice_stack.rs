use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::models::Notice;
use crate::state::NoticeEntry;
use crate::utils::NOTICE_TIMEOUT_MS;

#[derive(Properties, PartialEq)]
pub struct NoticeStackProps {
    pub entries: Vec<NoticeEntry>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NoticeStack)]
pub fn notice_stack(props: &NoticeStackProps) -> Html {
    html! {
        <div class="notice-stack">
            { for props.entries.iter().map(|entry| html! {
                <NoticeItem
                    key={entry.id}
                    notice={entry.notice.clone()}
                    on_dismiss={props.on_dismiss.reform({
                        let id = entry.id;
                        move |_: ()| id
                    })}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NoticeItemProps {
    notice: Notice,
    on_dismiss: Callback<()>,
}

#[function_component(NoticeItem)]
fn notice_item(props: &NoticeItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(NOTICE_TIMEOUT_MS, move || on_dismiss.emit(()));
            // Al desmontar se cancela el timeout
            move || drop(timeout)
        });
    }

    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={props.notice.severity.css_class()} role="alert" onclick={onclick}>
            {props.notice.message.clone()}
        </div>
    }
}
