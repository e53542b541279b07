use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Deserialize;
use shared::constants::{CONFIRMATION_BODY, CONFIRMATION_HEADER, INFO_BLURB, INFO_TITLE};
use shared::topics::{default_topics, REASON_TOPIC_IDS};
use shared::{ReasonTopic, Session};

/// Id of the `<script type="application/json">` element the hosting page may
/// use to override copy and reason topics.
pub const CONFIG_ELEMENT_ID: &str = "contact-config";

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);

pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reason_topics: Vec<ReasonTopic>,
    pub demo_user: Session,
    pub info_title: String,
    pub info_blurb: String,
    pub confirmation_header: String,
    pub confirmation_body: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reason_topics: default_topics(),
            demo_user: Session::demo(),
            info_title: INFO_TITLE.to_string(),
            info_blurb: INFO_BLURB.to_string(),
            confirmation_header: CONFIRMATION_HEADER.to_string(),
            confirmation_body: CONFIRMATION_BODY.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    UnknownTopic(String),
    DuplicateTopic(String),
    MissingTopic(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config json: {}", e),
            ConfigError::UnknownTopic(id) => write!(f, "unknown reason topic id {:?}", id),
            ConfigError::DuplicateTopic(id) => write!(f, "reason topic id {:?} listed twice", id),
            ConfigError::MissingTopic(id) => write!(f, "reason topic id {:?} is missing", id),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.check_topics()?;
        Ok(config)
    }

    fn check_topics(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for topic in &self.reason_topics {
            if !REASON_TOPIC_IDS.contains(&topic.id.as_str()) {
                return Err(ConfigError::UnknownTopic(topic.id.clone()));
            }
            if !seen.insert(topic.id.as_str()) {
                return Err(ConfigError::DuplicateTopic(topic.id.clone()));
            }
        }
        match REASON_TOPIC_IDS.iter().find(|id| !seen.contains(*id)) {
            Some(id) => Err(ConfigError::MissingTopic(*id)),
            None => Ok(()),
        }
    }

    /// Reads the page-embedded config. Absent config means defaults; broken
    /// config is logged and also means defaults.
    pub fn load() -> Self {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    log::info!("Loaded contact config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring contact config: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_topic_labels_can_be_relabelled() {
        let raw = r#"{"reason_topics": [
            {"id": "4", "label": "Something else"},
            {"id": "1", "label": "Membership"},
            {"id": "2", "label": "Technical"},
            {"id": "3", "label": "Upgrade"}
        ], "info_title": "Reach out"}"#;
        let config = AppConfig::from_json(raw).unwrap();
        assert_eq!(config.reason_topics[1].label, "Membership");
        assert_eq!(config.info_title, "Reach out");
        assert_eq!(config.confirmation_header, "Thank You");
    }

    #[test]
    fn test_topic_ids_are_checked() {
        let unknown = r#"{"reason_topics": [{"id": "9", "label": "x"}]}"#;
        assert!(matches!(AppConfig::from_json(unknown), Err(ConfigError::UnknownTopic(id)) if id == "9"));

        let missing = r#"{"reason_topics": [
            {"id": "1", "label": "a"}, {"id": "2", "label": "b"}, {"id": "3", "label": "c"}
        ]}"#;
        assert!(matches!(AppConfig::from_json(missing), Err(ConfigError::MissingTopic("4"))));

        let twice = r#"{"reason_topics": [
            {"id": "1", "label": "a"}, {"id": "1", "label": "b"}
        ]}"#;
        assert!(matches!(AppConfig::from_json(twice), Err(ConfigError::DuplicateTopic(_))));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config json"));
    }
}
