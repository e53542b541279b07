pub mod contact_state;

pub use contact_state::*;
