use shared::{ContactData, ContactUpdate};
use yew::prelude::*;

use crate::components::{ContactForm, Message, UserPanel};
use crate::config::AppConfig;
use crate::hooks::{use_contact_state, PageState};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub config: AppConfig,
}

/// Owns the page state and hands it to the view.
#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let contact = use_contact_state(props.config.demo_user.clone());

    html! {
        <ContactView
            config={props.config.clone()}
            state={contact.state}
            on_change={contact.on_change}
            on_submit={contact.on_submit}
            on_log_in={contact.on_log_in}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactViewProps {
    pub config: AppConfig,
    pub state: PageState,
    #[prop_or_default]
    pub on_change: Callback<ContactUpdate>,
    #[prop_or_default]
    pub on_submit: Callback<ContactData>,
    #[prop_or_default]
    pub on_log_in: Callback<MouseEvent>,
}

#[function_component(ContactView)]
pub fn contact_view(props: &ContactViewProps) -> Html {
    let config = &props.config;
    let state = &props.state;

    if state.submitted {
        return html! {
            <Message
                header={config.confirmation_header.clone()}
                text={config.confirmation_body.clone()}
            />
        };
    }

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::TOP_BAR}>
                <UserPanel session={state.session.clone()} on_click={props.on_log_in.clone()} />
            </div>

            <div class={styles::ROW}>
                <div class={styles::INFO_COLUMN}>
                    <h2 class={styles::TEXT_H2}>{config.info_title.clone()}</h2>
                    <p class={styles::TEXT_BODY}>{config.info_blurb.clone()}</p>
                </div>

                <div class={classes!(styles::FORM_COLUMN, styles::CARD)}>
                    <ContactForm
                        data={state.contact.clone()}
                        session={state.session.clone()}
                        on_change={props.on_change.clone()}
                        on_submit={props.on_submit.clone()}
                        topics={config.reason_topics.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
