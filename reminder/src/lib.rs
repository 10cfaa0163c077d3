pub mod cli;

pub use cli::ReminderCli;
pub use reminder_core::{render, OutputFormat, ReminderTemplate, Variant};
