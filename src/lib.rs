//! galebot - a Discord bot that remembers what the server says and
//! answers with a random remembered line when addressed.

pub mod domain;
pub mod application;
pub mod infrastructure;
