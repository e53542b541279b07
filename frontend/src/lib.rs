pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

#[cfg(test)]
mod test_utils;

use yew::prelude::*;

use crate::config::app_config;
use crate::pages::ContactPage;

#[function_component(App)]
pub fn app() -> Html {
    let config = app_config().clone();

    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <ContactPage config={config} />
            </div>
        </div>
    }
}
