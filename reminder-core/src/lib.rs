//! Core types for the plugin post-install reminder.
//!
//! A [`ReminderTemplate`] is a banner plus an ordered list of
//! [`IntegrationDescriptor`]s; [`render`] turns it into the text printed after
//! installation.

pub mod integration;
pub mod output;
pub mod render;
pub mod template;

pub use integration::{EnvVar, IntegrationDescriptor};
pub use output::{OutputFormat, OutputFormatter};
pub use render::render;
pub use template::{Banner, ReminderTemplate, Variant};

#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Unknown variant: {0}. Valid options are: full, bitbucket")]
    UnknownVariant(String),

    #[error("Invalid output format: {0}. Valid options are: human, json")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReminderError>;
