use yew::prelude::*;
use crate::models::Notice;
use crate::state::{NoticeAction, NoticeEntry, NoticeList};

#[derive(Clone)]
pub struct UseNoticesHandle {
    pub entries: Vec<NoticeEntry>,
    pub push: Callback<Notice>,
    pub dismiss: Callback<u32>,
}

#[hook]
pub fn use_notices() -> UseNoticesHandle {
    let list = use_reducer(NoticeList::default);

    let push = {
        let dispatcher = list.dispatcher();
        Callback::from(move |notice: Notice| dispatcher.dispatch(NoticeAction::Push(notice)))
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(NoticeAction::Dismiss(id)))
    };

    UseNoticesHandle {
        entries: list.entries.clone(),
        push,
        dismiss,
    }
}
