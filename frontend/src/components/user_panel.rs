use shared::constants::{welcome_text, LOG_IN_LABEL};
use shared::Session;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct UserPanelProps {
    #[prop_or_default]
    pub session: Option<Session>,
    #[prop_or_default]
    pub on_click: Callback<MouseEvent>,
}

#[function_component(UserPanel)]
pub fn user_panel(props: &UserPanelProps) -> Html {
    let label = match &props.session {
        Some(session) => welcome_text(&session.name),
        None => LOG_IN_LABEL.to_string(),
    };

    html! {
        <button type="button" class={styles::BUTTON_SECONDARY} onclick={props.on_click.clone()}>
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_with, text_content};

    #[tokio::test]
    async fn test_shows_log_in_without_session() {
        let html = render_with::<UserPanel, _>(|| UserPanelProps {
            session: None,
            on_click: Callback::default(),
        })
        .await;
        assert_eq!(text_content(&html), "Log In");
    }

    #[tokio::test]
    async fn test_welcomes_user() {
        let html = render_with::<UserPanel, _>(|| UserPanelProps {
            session: Some(Session::demo()),
            on_click: Callback::default(),
        })
        .await;
        assert_eq!(text_content(&html), "Welcome, Test User");
        assert!(!html.contains("Log In"));
    }
}
