use post_install_reminder::{render, ReminderTemplate};
use std::process::{Command, Output};
use tempfile::tempdir;

fn reminder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_post-install-reminder"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run post-install-reminder")
}

#[test]
fn test_hook_invocation_prints_banner_and_succeeds() {
    let output = reminder(&[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", render(&ReminderTemplate::full()))
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = reminder(&[]);
    let second = reminder(&[]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_output_ignores_environment() {
    let plain = reminder(&[]);
    let with_env = Command::new(env!("CARGO_BIN_EXE_post-install-reminder"))
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "ghp_secret")
        .env("BITBUCKET_BASE_URL", "https://bitbucket.example.com")
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(with_env.status.success());
    assert_eq!(plain.stdout, with_env.stdout);
    let stdout = String::from_utf8(with_env.stdout).unwrap();
    assert!(!stdout.contains("ghp_secret"));
}

#[test]
fn test_full_variant_lists_every_variable() {
    let stdout = String::from_utf8(reminder(&["--variant", "full"]).stdout).unwrap();
    for name in [
        "GITHUB_PERSONAL_ACCESS_TOKEN",
        "BITBUCKET_USERNAME",
        "BITBUCKET_APP_PASSWORD",
        "BITBUCKET_TOKEN",
        "BITBUCKET_BASE_URL",
    ] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn test_bitbucket_variant_omits_github() {
    let output = reminder(&["--variant", "bitbucket"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("GITHUB_PERSONAL_ACCESS_TOKEN"));
    assert!(!stdout.contains("GitHub"));
    assert!(stdout.contains("For Bitbucket Cloud:"));
    assert!(stdout.contains("For Bitbucket Data Center:"));
}

#[test]
fn test_missing_config_still_succeeds() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.yaml");

    let output = reminder(&["--config", missing.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", render(&ReminderTemplate::full()))
    );
    assert!(String::from_utf8(output.stderr).unwrap().contains("Ignoring reminder template"));
}

#[test]
fn test_oversized_rule_in_config_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.yaml");
    let mut template = ReminderTemplate::bitbucket_only();
    template.banner.rule_width = usize::MAX;
    template.save_to_file(&path).unwrap();

    let output = reminder(&["--config", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", render(&ReminderTemplate::full()))
    );
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("exceeds the maximum"));
}

#[test]
fn test_version_flag() {
    let output = reminder(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains(env!("CARGO_PKG_VERSION")));
}
