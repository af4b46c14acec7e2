use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandHandler, Invocation};
use crate::domain::traits::Bot;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(DATE_FORMAT).to_string()
}

/// `!date` - current local date and time
pub struct DateCommand;

#[async_trait]
impl CommandHandler for DateCommand {
    async fn execute(&self, _invocation: Invocation, _bot: &dyn Bot) -> Result<String, CommandError> {
        Ok(format!("The current date is: {}", format_timestamp(&Local::now())))
    }
}

pub fn command() -> Command {
    Command::new("date")
        .with_description("Show the current date and time")
        .with_usage("!date")
        .with_handler(DateCommand)
}
