//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Brain file and quote file
//! - Adapters: Platform integrations (Discord, console)

pub mod config;
pub mod storage;
pub mod adapters;
