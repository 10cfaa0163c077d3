use crate::render::render;
use crate::template::ReminderTemplate;
use crate::{ReminderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ReminderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ReminderError::UnknownFormat(s.to_string())),
        }
    }
}

pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ReminderSummary<'a> {
    title: &'a str,
    help_command: &'a str,
    disable_command: &'a str,
    integrations: Vec<IntegrationSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct IntegrationSummary<'a> {
    id: &'a str,
    label: &'a str,
    env: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint_url: Option<&'a str>,
}

impl OutputFormatter for ReminderTemplate {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(render(self)),
            OutputFormat::Json => self.format_json(),
        }
    }
}

impl ReminderTemplate {
    fn format_json(&self) -> Result<String> {
        let summary = ReminderSummary {
            title: &self.banner.title,
            help_command: &self.banner.help_command,
            disable_command: &self.banner.disable_command,
            integrations: self
                .integrations
                .iter()
                .map(|i| IntegrationSummary {
                    id: &i.id,
                    label: &i.label,
                    env: i.env_names().collect(),
                    hint_url: i.hint_url.as_deref(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}
