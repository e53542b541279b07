pub const DEMO_USER_NAME: &str = "Test User";
pub const DEMO_USER_EMAIL: &str = "user@example.com";

pub const FORM_TITLE: &str = "Contact Form";
pub const NAME_LABEL: &str = "Your Name:";
pub const EMAIL_LABEL: &str = "Your Best Email:";
pub const OPTION_GROUP_LABEL: &str = "Select your membership option:";
pub const SELECT_LABEL: &str = "What can we help you with:";
pub const MESSAGE_LABEL: &str = "Message:";
pub const MESSAGE_PLACEHOLDER: &str = "Please type your question here";
pub const MESSAGE_ROWS: &str = "10";
pub const TERMS_LABEL: &str = "I agree to terms and conditions";
pub const SUBMIT_LABEL: &str = "Send";

pub const LOG_IN_LABEL: &str = "Log In";

pub const INFO_TITLE: &str = "Contact us";
pub const INFO_BLURB: &str = "Please fill in form on the right to get fast reply";

pub const CONFIRMATION_HEADER: &str = "Thank You";
pub const CONFIRMATION_BODY: &str = "We will reply to your message in next 24h. Have a nice day! ;-)";

pub fn welcome_text(name: &str) -> String {
    format!("Welcome, {}", name)
}
