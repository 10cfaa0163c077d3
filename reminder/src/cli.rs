use anyhow::Result;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Arg, ArgMatches, Command};
use reminder_core::{OutputFormat, OutputFormatter, ReminderTemplate, Variant};
use std::io::{self, Write};
use std::path::Path;

pub struct ReminderCli;

impl ReminderCli {
    pub fn new() -> Self {
        Self
    }

    pub fn build_app(&self) -> Command {
        let styles = Styles::styled()
            .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
            .usage(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
            .literal(AnsiColor::BrightWhite.on_default())
            .placeholder(AnsiColor::BrightYellow.on_default())
            .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
            .valid(AnsiColor::BrightGreen.on_default())
            .invalid(AnsiColor::BrightRed.on_default());

        Command::new("post-install-reminder")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Print the configuration reminder shown after the plugin is installed")
            .styles(styles)
            .arg(
                Arg::new("variant")
                    .long("variant")
                    .value_name("VARIANT")
                    .help("Built-in template to print")
                    .value_parser(["full", "bitbucket"])
                    .default_value("full"),
            )
            .arg(
                Arg::new("config")
                    .long("config")
                    .short('c')
                    .value_name("FILE")
                    .help("Template file (YAML or JSON) to print instead of a built-in one"),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_name("FORMAT")
                    .help("Output format")
                    .value_parser(["human", "json"])
                    .default_value("human"),
            )
    }

    /// Parses `args` and prints the reminder to stdout.
    pub fn run(&self, args: Vec<String>) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_to(args, &mut handle)
    }

    pub fn run_to<W: Write>(&self, args: Vec<String>, out: &mut W) -> Result<()> {
        self.init_logging();

        let matches = self.build_app().try_get_matches_from(args)?;
        let format = self.output_format(&matches)?;
        let template = self.resolve_template(&matches)?;

        writeln!(out, "{}", template.format(format)?)?;
        out.flush()?;
        Ok(())
    }

    fn output_format(&self, matches: &ArgMatches) -> Result<OutputFormat> {
        match matches.get_one::<String>("format") {
            Some(format) => Ok(format.parse()?),
            None => Ok(OutputFormat::default()),
        }
    }

    /// A template file that cannot be used never fails the install; the
    /// selected built-in variant is printed instead.
    fn resolve_template(&self, matches: &ArgMatches) -> Result<ReminderTemplate> {
        let variant = match matches.get_one::<String>("variant") {
            Some(name) => name.parse::<Variant>()?,
            None => Variant::default(),
        };

        if let Some(path) = matches.get_one::<String>("config") {
            match ReminderTemplate::load_from_file(Path::new(path)) {
                Ok(template) => return Ok(template),
                Err(e) => {
                    tracing::warn!(
                        "Ignoring reminder template {}: {}; using the {} variant",
                        path,
                        e,
                        variant
                    );
                }
            }
        }

        tracing::debug!("Using built-in {} template", variant);
        Ok(variant.template())
    }

    fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("post_install_reminder=warn,reminder_core=warn"));

        // Already installed when run more than once in a process.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .try_init();
    }
}

impl Default for ReminderCli {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reminder_core::render;
    use tempfile::tempdir;

    fn run(args: &[&str]) -> Result<String> {
        let cli = ReminderCli::new();
        let mut out = Vec::new();
        let args = std::iter::once("post-install-reminder")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        cli.run_to(args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_cli_creation() {
        let app = ReminderCli::new().build_app();
        assert_eq!(app.get_name(), "post-install-reminder");
        assert!(app.get_version().is_some());
    }

    #[test]
    fn test_no_arguments_prints_full_banner() {
        let output = run(&[]).unwrap();
        assert_eq!(output, format!("{}\n", render(&ReminderTemplate::full())));
        assert!(output.ends_with("━\n\n"));
    }

    #[test]
    fn test_bitbucket_variant() {
        let output = run(&["--variant", "bitbucket"]).unwrap();
        assert!(!output.contains("GITHUB_PERSONAL_ACCESS_TOKEN"));
        assert!(output.contains("BITBUCKET_APP_PASSWORD"));
        assert!(output.contains("BITBUCKET_BASE_URL"));
    }

    #[test]
    fn test_json_format() {
        let output = run(&["--format", "json"]).unwrap();
        assert!(output.trim_start().starts_with('{'));
        assert!(output.contains("\"bitbucket-datacenter\""));
    }

    #[test]
    fn test_unusable_config_falls_back_to_variant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "intro: [").unwrap();

        let output = run(&["--config", path.to_str().unwrap(), "--variant", "bitbucket"]).unwrap();
        assert_eq!(output, format!("{}\n", render(&ReminderTemplate::bitbucket_only())));
    }

    #[test]
    fn test_config_file_is_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reminder.yaml");
        let mut template = ReminderTemplate::bitbucket_only();
        template.banner.help_command = "/bitbucket:help".to_string();
        template.save_to_file(&path).unwrap();

        let output = run(&["--config", path.to_str().unwrap()]).unwrap();
        assert!(output.contains("Run /bitbucket:help for detailed configuration instructions."));
    }

    #[test]
    fn test_unknown_flag_is_a_clap_error() {
        let err = run(&["--verbose"]).unwrap_err();
        let clap_err = err.downcast_ref::<clap::Error>().unwrap();
        assert_eq!(clap_err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
