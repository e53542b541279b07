use std::rc::Rc;

use shared::{ContactData, ContactUpdate, Session};
use yew::prelude::*;

/// Everything the contact page owns. Children only ever see copies of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub submitted: bool,
    pub contact: ContactData,
    pub session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    ContactChanged(ContactUpdate),
    ContactSubmitted(ContactData),
    LogIn(Session),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::ContactChanged(update) => Rc::new(PageState {
                contact: update.apply(&self.contact),
                ..(*self).clone()
            }),
            PageAction::ContactSubmitted(data) => {
                // Nothing is sent anywhere yet; the record is only logged.
                match serde_json::to_string(&data) {
                    Ok(json) => log::info!("Contact submitted: {}", json),
                    Err(e) => log::warn!("Contact submitted but could not be serialized: {}", e),
                }
                Rc::new(PageState {
                    submitted: true,
                    contact: ContactData::default(),
                    ..(*self).clone()
                })
            }
            PageAction::LogIn(session) => {
                log::info!("Logged in as {}", session.name);
                Rc::new(PageState {
                    session: Some(session),
                    ..(*self).clone()
                })
            }
        }
    }
}

#[derive(Clone)]
pub struct ContactState {
    pub state: PageState,
    pub on_change: Callback<ContactUpdate>,
    pub on_submit: Callback<ContactData>,
    pub on_log_in: Callback<MouseEvent>,
}

#[hook]
pub fn use_contact_state(demo_user: Session) -> ContactState {
    let state = use_reducer(PageState::default);

    let on_change = {
        let state = state.clone();
        Callback::from(move |update: ContactUpdate| {
            state.dispatch(PageAction::ContactChanged(update));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |data: ContactData| {
            state.dispatch(PageAction::ContactSubmitted(data));
        })
    };

    let on_log_in = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(PageAction::LogIn(demo_user.clone()));
        })
    };

    ContactState {
        state: (*state).clone(),
        on_change,
        on_submit,
        on_log_in,
    }
}
