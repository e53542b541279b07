pub mod constants;
pub mod contact;
pub mod fields;
pub mod session;
pub mod topics;

pub use contact::{ContactData, ContactUpdate, FieldChange, MEMBERSHIP_OPTIONS};
pub use fields::FormField;
pub use session::Session;
pub use topics::ReasonTopic;
