//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod command;
pub mod quote;

pub use user::User;
pub use message::{Message, Content, Guild};
pub use command::{Check, Command, CommandHandler, CommandRegistry, Invocation};
pub use quote::QuoteRecord;
