//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: brain recording, responder, command execution
//! - Commands: date, quote and nickname handlers
//! - Context: shared state built at startup
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and dispatching

pub mod commands;
pub mod context;
pub mod errors;
pub mod messaging;
pub mod services;
