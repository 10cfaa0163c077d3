use serde::{Deserialize, Serialize};

/// An environment variable an integration expects, with the value shown in
/// the `export` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub placeholder: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Names must look like shell variables: `[A-Z_][A-Z0-9_]*`.
    pub fn has_valid_name(&self) -> bool {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

/// One MCP server shipped with the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDescriptor {
    /// Server name as listed by `/mcp`.
    pub id: String,
    pub label: String,
    /// Shown next to the id in the list of servers that can be disabled.
    pub summary: String,
    #[serde(default)]
    pub env: Vec<EnvVar>,
    /// Where the user creates the credential, if anywhere specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_url: Option<String>,
}

impl IntegrationDescriptor {
    pub fn env_names(&self) -> impl Iterator<Item = &str> {
        self.env.iter().map(|var| var.name.as_str())
    }

    pub fn github() -> Self {
        Self {
            id: "github".to_string(),
            label: "GitHub".to_string(),
            summary: "For GitHub (github.com)".to_string(),
            env: vec![EnvVar::new("GITHUB_PERSONAL_ACCESS_TOKEN", "your-token")],
            hint_url: Some("https://github.com/settings/tokens".to_string()),
        }
    }

    pub fn bitbucket_cloud() -> Self {
        Self {
            id: "bitbucket-cloud".to_string(),
            label: "Bitbucket Cloud".to_string(),
            summary: "For Bitbucket Cloud (bitbucket.org)".to_string(),
            env: vec![
                EnvVar::new("BITBUCKET_USERNAME", "your-username"),
                EnvVar::new("BITBUCKET_APP_PASSWORD", "your-app-password"),
            ],
            hint_url: None,
        }
    }

    pub fn bitbucket_datacenter() -> Self {
        Self {
            id: "bitbucket-datacenter".to_string(),
            label: "Bitbucket Data Center".to_string(),
            summary: "For self-hosted Bitbucket Server".to_string(),
            env: vec![
                EnvVar::new("BITBUCKET_USERNAME", "your-username"),
                EnvVar::new("BITBUCKET_TOKEN", "your-token"),
                EnvVar::new("BITBUCKET_BASE_URL", "https://your-server.com"),
            ],
            hint_url: None,
        }
    }
}
