use shared::constants::{
    EMAIL_LABEL, FORM_TITLE, MESSAGE_LABEL, MESSAGE_PLACEHOLDER, MESSAGE_ROWS, NAME_LABEL,
    OPTION_GROUP_LABEL, SELECT_LABEL, SUBMIT_LABEL, TERMS_LABEL,
};
use shared::topics::default_topics;
use shared::{ContactData, ContactUpdate, FieldChange, FormField, ReasonTopic, Session, MEMBERSHIP_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub data: ContactData,
    #[prop_or_default]
    pub session: Option<Session>,
    pub on_change: Callback<ContactUpdate>,
    pub on_submit: Callback<ContactData>,
    #[prop_or_else(default_topics)]
    pub topics: Vec<ReasonTopic>,
}

fn emit_submit(data: &ContactData, on_submit: &Callback<ContactData>) {
    on_submit.emit(data.clone());
}

/// Returns whether the key press was turned into a submission.
fn emit_key_submit(
    field: FormField,
    key: &str,
    data: &ContactData,
    on_submit: &Callback<ContactData>,
) -> bool {
    let submits = field.should_submit(key);
    if submits {
        emit_submit(data, on_submit);
    }
    submits
}

fn emit_text_change(field: FormField, value: String, on_change: &Callback<ContactUpdate>) {
    if let Some(change) = field.text_change(value) {
        on_change.emit(change.into());
    }
}

fn emit_option_change(data: &ContactData, label: &str, on_change: &Callback<ContactUpdate>) {
    if let Some(change) = data.option_change(label) {
        on_change.emit(change.into());
    }
}

fn emit_terms_change(checked: bool, on_change: &Callback<ContactUpdate>) {
    on_change.emit(FieldChange::Terms(checked).into());
}

fn submit_on_enter(
    field: FormField,
    data: &ContactData,
    on_submit: &Callback<ContactData>,
) -> Callback<KeyboardEvent> {
    let data = data.clone();
    let on_submit = on_submit.clone();
    Callback::from(move |e: KeyboardEvent| {
        if emit_key_submit(field, &e.key(), &data, &on_submit) {
            e.prevent_default();
        }
    })
}

fn text_input_change(field: FormField, on_change: &Callback<ContactUpdate>) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        emit_text_change(field, input.value(), &on_change);
    })
}

fn text_input(field: FormField, label: &'static str, value: &str, props: &ContactFormProps) -> Html {
    let id = field.input_id();
    html! {
        <div class={styles::FORM_GROUP}>
            <label for={id.clone()} class={styles::TEXT_LABEL}>{label}</label>
            <input
                id={id}
                name={field.name()}
                class={styles::INPUT}
                value={value.to_string()}
                oninput={text_input_change(field, &props.on_change)}
                onkeydown={submit_on_enter(field, &props.data, &props.on_submit)}
            />
        </div>
    }
}

/// Controlled contact form. Holds no state of its own: every edit goes out
/// through `on_change` and the record comes back in through `data`.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let data = &props.data;
    let session = props.session.as_ref();
    let select_ref = use_node_ref();

    // `selected` on the options only seeds the dropdown; once the user has
    // picked an entry the element value must be pushed explicitly.
    {
        let select_ref = select_ref.clone();
        use_effect_with(data.select.clone(), move |selected| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                if select.value() != *selected {
                    select.set_value(selected);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let data = data.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            emit_submit(&data, &on_submit);
        })
    };

    let select_onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                emit_text_change(FormField::Select, select.value(), &on_change);
            }
        })
    };

    let message_oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            emit_text_change(FormField::Message, textarea.value(), &on_change);
        })
    };

    let terms_onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            emit_terms_change(checkbox.checked(), &on_change);
        })
    };

    let option_radios = MEMBERSHIP_OPTIONS.into_iter().map(|label| {
        let onchange = {
            let data = data.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: Event| emit_option_change(&data, label, &on_change))
        };
        html! {
            <label key={label} class={styles::CHOICE_LABEL}>
                <input
                    type="radio"
                    name={FormField::Option.name()}
                    value={label}
                    checked={data.is_option_selected(label)}
                    onchange={onchange}
                    onkeydown={submit_on_enter(FormField::Option, data, &props.on_submit)}
                />
                {label}
            </label>
        }
    });

    let topic_options = props.topics.iter().map(|topic| {
        html! {
            <option key={topic.id.clone()} value={topic.id.clone()} selected={data.select == topic.id}>
                {topic.label.clone()}
            </option>
        }
    });

    html! {
        <form onsubmit={onsubmit} class={styles::FORM}>
            <h3 class={styles::TEXT_H3}>{FORM_TITLE}</h3>

            {text_input(FormField::Name, NAME_LABEL, data.displayed_name(session), props)}
            {text_input(FormField::Email, EMAIL_LABEL, data.displayed_email(session), props)}

            <label class={styles::TEXT_LABEL}>{OPTION_GROUP_LABEL}</label>
            <div class={styles::OPTION_ROW}>
                {for option_radios}
            </div>

            <hr class={styles::DIVIDER} />

            <div class={styles::FORM_GROUP}>
                <label for={FormField::Select.input_id()} class={styles::TEXT_LABEL}>{SELECT_LABEL}</label>
                <select
                    ref={select_ref}
                    id={FormField::Select.input_id()}
                    name={FormField::Select.name()}
                    class={styles::INPUT}
                    onchange={select_onchange}
                    onkeydown={submit_on_enter(FormField::Select, data, &props.on_submit)}
                >
                    {for topic_options}
                </select>
            </div>

            <div class={styles::FORM_GROUP}>
                <label for={FormField::Message.input_id()} class={styles::TEXT_LABEL}>{MESSAGE_LABEL}</label>
                <textarea
                    id={FormField::Message.input_id()}
                    name={FormField::Message.name()}
                    rows={MESSAGE_ROWS}
                    placeholder={MESSAGE_PLACEHOLDER}
                    class={styles::INPUT}
                    value={data.message.clone()}
                    oninput={message_oninput}
                />
            </div>

            <div class={styles::FORM_GROUP}>
                <label for={FormField::Terms.input_id()} class={styles::CHOICE_LABEL}>
                    <input
                        id={FormField::Terms.input_id()}
                        type="checkbox"
                        name={FormField::Terms.name()}
                        checked={data.terms}
                        onchange={terms_onchange}
                        onkeydown={submit_on_enter(FormField::Terms, data, &props.on_submit)}
                    />
                    {TERMS_LABEL}
                </label>
            </div>

            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "contactform-submit")}>
                {SUBMIT_LABEL}
            </button>
        </form>
    }
}
