use serde::{Deserialize, Serialize};

use crate::constants::{DEMO_USER_EMAIL, DEMO_USER_NAME};

/// Display identity of the logged-in visitor. Kept apart from the contact
/// record; an absent session is `Option<Session>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The fixed user the mocked login hands out.
    pub fn demo() -> Self {
        Self::new(DEMO_USER_NAME, DEMO_USER_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user() {
        let session = Session::demo();
        assert_eq!(session.name, "Test User");
        assert_eq!(session.email, "user@example.com");
    }
}
