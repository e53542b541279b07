use serde::{Deserialize, Serialize};

use crate::session::Session;

pub const MEMBERSHIP_OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Everything the contact form collects. Always complete; updates produce a
/// fresh record rather than patching one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub option: String,
    pub select: String,
    pub message: String,
    pub terms: bool,
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            option: MEMBERSHIP_OPTIONS[0].to_string(),
            select: "1".to_string(),
            message: String::new(),
            terms: false,
        }
    }
}

impl ContactData {
    /// Radio selection. Picking the option that is already selected is a no-op.
    pub fn option_change(&self, label: &str) -> Option<FieldChange> {
        if self.option == label {
            None
        } else {
            Some(FieldChange::Option(label.to_string()))
        }
    }

    pub fn displayed_name<'a>(&'a self, session: Option<&'a Session>) -> &'a str {
        session.map_or(self.name.as_str(), |s| s.name.as_str())
    }

    pub fn displayed_email<'a>(&'a self, session: Option<&'a Session>) -> &'a str {
        session.map_or(self.email.as_str(), |s| s.email.as_str())
    }

    pub fn is_option_selected(&self, label: &str) -> bool {
        self.option == label
    }
}

/// A single edited field carrying its full new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Email(String),
    Option(String),
    Select(String),
    Message(String),
    Terms(bool),
}

impl FieldChange {
    pub fn apply(self, prev: &ContactData) -> ContactData {
        let mut next = prev.clone();
        match self {
            FieldChange::Name(value) => next.name = value,
            FieldChange::Email(value) => next.email = value,
            FieldChange::Option(value) => next.option = value,
            FieldChange::Select(value) => next.select = value,
            FieldChange::Message(value) => next.message = value,
            FieldChange::Terms(value) => next.terms = value,
        }
        next
    }
}

/// How the owner of a `ContactData` is asked to move to its next value:
/// either a whole replacement or a field edit applied to whatever the owner
/// currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUpdate {
    Replace(ContactData),
    Field(FieldChange),
}

impl ContactUpdate {
    pub fn apply(self, prev: &ContactData) -> ContactData {
        log::debug!("contact update: {:?}", self);
        match self {
            ContactUpdate::Replace(data) => data,
            ContactUpdate::Field(change) => change.apply(prev),
        }
    }
}

impl From<FieldChange> for ContactUpdate {
    fn from(change: FieldChange) -> Self {
        ContactUpdate::Field(change)
    }
}

impl From<ContactData> for ContactUpdate {
    fn from(data: ContactData) -> Self {
        ContactUpdate::Replace(data)
    }
}
