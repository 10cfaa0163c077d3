use crate::integration::IntegrationDescriptor;
use crate::{ReminderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Static framing around the integration sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub title: String,
    #[serde(default = "default_rule")]
    pub rule: char,
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
    pub help_command: String,
    #[serde(default = "default_disable_command")]
    pub disable_command: String,
}

fn default_rule() -> char {
    '━'
}

/// Widest rule a template may ask for.
pub const MAX_RULE_WIDTH: usize = 200;

fn default_rule_width() -> usize {
    78
}

fn default_disable_command() -> String {
    "/mcp".to_string()
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: "Claude Skills Plugin - Configuration Reminder".to_string(),
            rule: default_rule(),
            rule_width: default_rule_width(),
            help_command: "/claude-skills:help".to_string(),
            disable_command: default_disable_command(),
        }
    }
}

impl Banner {
    pub fn rule_line(&self) -> String {
        self.rule.to_string().repeat(self.rule_width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTemplate {
    #[serde(default)]
    pub banner: Banner,
    pub intro: String,
    pub integrations: Vec<IntegrationDescriptor>,
}

/// The built-in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// GitHub plus both Bitbucket servers.
    #[default]
    Full,
    Bitbucket,
}

impl Variant {
    #[cfg(test)]
    pub fn all() -> &'static [Variant] {
        &[Variant::Full, Variant::Bitbucket]
    }

    pub fn template(self) -> ReminderTemplate {
        match self {
            Variant::Full => ReminderTemplate::full(),
            Variant::Bitbucket => ReminderTemplate::bitbucket_only(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Full => write!(f, "full"),
            Variant::Bitbucket => write!(f, "bitbucket"),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = ReminderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Variant::Full),
            "bitbucket" => Ok(Variant::Bitbucket),
            _ => Err(ReminderError::UnknownVariant(s.to_string())),
        }
    }
}

impl Default for ReminderTemplate {
    fn default() -> Self {
        Self::full()
    }
}

impl ReminderTemplate {
    pub fn full() -> Self {
        Self {
            banner: Banner::default(),
            intro: "This plugin includes MCP servers for GitHub and Bitbucket. Please:".to_string(),
            integrations: vec![
                IntegrationDescriptor::github(),
                IntegrationDescriptor::bitbucket_cloud(),
                IntegrationDescriptor::bitbucket_datacenter(),
            ],
        }
    }

    pub fn bitbucket_only() -> Self {
        Self {
            banner: Banner::default(),
            intro: "This plugin includes MCP servers for Bitbucket. Please:".to_string(),
            integrations: vec![
                IntegrationDescriptor::bitbucket_cloud(),
                IntegrationDescriptor::bitbucket_datacenter(),
            ],
        }
    }

    #[cfg(test)]
    pub fn integration(&self, id: &str) -> Option<&IntegrationDescriptor> {
        self.integrations.iter().find(|i| i.id == id)
    }

    /// Every env var name in template order, duplicates included.
    #[cfg(test)]
    pub fn env_names(&self) -> Vec<&str> {
        self.integrations
            .iter()
            .flat_map(|i| i.env_names())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.banner.rule_width == 0 {
            return Err(invalid("rule_width must be greater than zero"));
        }
        if self.banner.rule_width > MAX_RULE_WIDTH {
            return Err(invalid(format!(
                "rule_width {} exceeds the maximum of {}",
                self.banner.rule_width, MAX_RULE_WIDTH
            )));
        }
        if self.banner.title.trim().is_empty() {
            return Err(invalid("banner title is empty"));
        }
        if self.integrations.is_empty() {
            return Err(invalid("no integrations configured"));
        }

        let mut seen = HashSet::new();
        for integration in &self.integrations {
            if integration.id.trim().is_empty() {
                return Err(invalid("integration id is empty"));
            }
            if !seen.insert(integration.id.as_str()) {
                return Err(invalid(format!("duplicate integration id '{}'", integration.id)));
            }
            if integration.label.trim().is_empty() {
                return Err(invalid(format!("integration '{}' has no label", integration.id)));
            }
            if integration.env.is_empty() {
                return Err(invalid(format!(
                    "integration '{}' lists no environment variables",
                    integration.id
                )));
            }
            if let Some(var) = integration.env.iter().find(|v| !v.has_valid_name()) {
                return Err(invalid(format!(
                    "integration '{}' has invalid environment variable name '{}'",
                    integration.id, var.name
                )));
            }
        }

        Ok(())
    }

    /// Loads a template from YAML, falling back to JSON, and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let template = match serde_yaml::from_str::<ReminderTemplate>(&content) {
            Ok(template) => template,
            Err(yaml_err) => match serde_json::from_str::<ReminderTemplate>(&content) {
                Ok(template) => template,
                Err(_) => return Err(ReminderError::Yaml(yaml_err)),
            },
        };
        template.validate()?;

        tracing::debug!(
            "Loaded reminder template with {} integrations from {}",
            template.integrations.len(),
            path.display()
        );
        Ok(template)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ReminderError {
    ReminderError::InvalidTemplate(msg.into())
}
