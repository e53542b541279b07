use crate::contact::FieldChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Option,
    Select,
    Message,
    Terms,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Option,
        FormField::Select,
        FormField::Message,
        FormField::Terms,
    ];

    /// Enter inserts a newline in the message area; everywhere else it sends.
    pub fn submits_on_enter(self) -> bool {
        !matches!(self, FormField::Message)
    }

    /// Should a keydown with this `KeyboardEvent.key` submit from this field.
    pub fn should_submit(self, key: &str) -> bool {
        is_submit_key(key) && self.submits_on_enter()
    }

    /// The `name` attribute, matching the `ContactData` field it edits.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Option => "option",
            FormField::Select => "select",
            FormField::Message => "message",
            FormField::Terms => "terms",
        }
    }

    pub fn input_id(self) -> String {
        format!("input-{}", self.name())
    }

    /// Change carrying the full text of a text-valued field. The terms
    /// checkbox reports a boolean instead and has no text change.
    pub fn text_change(self, value: String) -> Option<FieldChange> {
        match self {
            FormField::Name => Some(FieldChange::Name(value)),
            FormField::Email => Some(FieldChange::Email(value)),
            FormField::Option => Some(FieldChange::Option(value)),
            FormField::Select => Some(FieldChange::Select(value)),
            FormField::Message => Some(FieldChange::Message(value)),
            FormField::Terms => None,
        }
    }
}

pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
