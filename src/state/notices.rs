// ============================================================================
// NOTICES - Pila de snackbars (reducer de Yew)
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::Notice;

#[derive(Clone, PartialEq, Debug)]
pub struct NoticeEntry {
    pub id: u32,
    pub notice: Notice,
}

pub enum NoticeAction {
    Push(Notice),
    Dismiss(u32),
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct NoticeList {
    next_id: u32,
    pub entries: Vec<NoticeEntry>,
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(notice) => {
                next.entries.push(NoticeEntry { id: next.next_id, notice });
                next.next_id = next.next_id.wrapping_add(1);
            }
            NoticeAction::Dismiss(id) => next.entries.retain(|entry| entry.id != id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes_one() {
        let list = Rc::new(NoticeList::default())
            .reduce(NoticeAction::Push(Notice::info("a")))
            .reduce(NoticeAction::Push(Notice::error("b")));
        assert_eq!(list.entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![0, 1]);

        let list = list.reduce(NoticeAction::Dismiss(0));
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].notice.message, "b");

        let list = list.reduce(NoticeAction::Dismiss(42));
        assert_eq!(list.entries.len(), 1);
    }
}
