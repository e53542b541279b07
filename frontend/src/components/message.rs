use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    #[prop_or_default]
    pub header: Option<AttrValue>,
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Header plus body. `text` wins over `children`; with neither the body is empty.
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let body = match &props.text {
        Some(text) => html! { {text.to_string()} },
        None => props.children.clone(),
    };

    html! {
        <div class={styles::MESSAGE}>
            {
                props.header.clone().map(|header| html! {
                    <h3 class={styles::MESSAGE_HEADER}>{header.to_string()}</h3>
                })
            }
            <div class={styles::MESSAGE_BODY}>
                {body}
            </div>
        </div>
    }
}
