use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifiers of the "What can we help you with" entries. Labels may be
/// reconfigured, these may not.
pub const REASON_TOPIC_IDS: [&str; 4] = ["1", "2", "3", "4"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonTopic {
    pub id: String,
    pub label: String,
}

impl ReasonTopic {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub static DEFAULT_REASON_TOPICS: Lazy<Vec<ReasonTopic>> = Lazy::new(|| {
    [
        "I have question about my membership",
        "I have technical question",
        "I would like to change membership",
        "Other question",
    ]
    .iter()
    .zip(REASON_TOPIC_IDS)
    .map(|(label, id)| ReasonTopic::new(id, *label))
    .collect()
});

pub fn default_topics() -> Vec<ReasonTopic> {
    DEFAULT_REASON_TOPICS.clone()
}
