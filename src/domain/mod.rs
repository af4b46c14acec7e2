//! Domain layer - Core business logic with no platform dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (User, Message, Command, QuoteRecord)
//! - Traits: Abstractions for infrastructure (Bot, BrainStore)
//! - Rules: Trigger detection and brain entry scrubbing

pub mod entities;
pub mod rules;
pub mod traits;
