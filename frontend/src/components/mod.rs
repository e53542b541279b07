pub mod contact_form;
pub mod message;
pub mod user_panel;

pub use contact_form::ContactForm;
pub use message::Message;
pub use user_panel::UserPanel;
