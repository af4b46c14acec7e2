//! Business rules - pure decisions over domain entities

pub mod mentions;
pub mod trigger;

pub use mentions::{to_brain_entry, USER_PLACEHOLDER};
pub use trigger::TriggerContext;
