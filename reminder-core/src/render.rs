use crate::template::ReminderTemplate;
use std::fmt::Write;

const INDENT: &str = "  ";
const LIST_INDENT: &str = "     ";
const EXPORT_INDENT: &str = "       ";

/// Renders the reminder banner.
///
/// The result starts with an empty line and ends with the closing rule and a
/// newline. Rendering is pure: the same template always yields the same bytes.
pub fn render(template: &ReminderTemplate) -> String {
    let banner = &template.banner;
    let rule = banner.rule_line();
    let mut out = String::new();

    out.push('\n');
    line(&mut out, &rule);
    line(&mut out, &format!("{INDENT}{}", banner.title));
    line(&mut out, &rule);
    out.push('\n');
    line(&mut out, &format!("{INDENT}{}", template.intro));
    out.push('\n');

    line(
        &mut out,
        &format!(
            "{INDENT}1. DISABLE the servers you don't need (use {} command)",
            banner.disable_command
        ),
    );
    let id_width = template
        .integrations
        .iter()
        .map(|i| i.id.chars().count())
        .max()
        .unwrap_or(0);
    for integration in &template.integrations {
        line(
            &mut out,
            &format!(
                "{LIST_INDENT}- {:<width$} → {}",
                integration.id,
                integration.summary,
                width = id_width
            ),
        );
    }
    out.push('\n');

    line(&mut out, &format!("{INDENT}2. SET required environment variables:"));
    for integration in &template.integrations {
        out.push('\n');
        line(&mut out, &format!("{LIST_INDENT}For {}:", integration.label));
        for var in &integration.env {
            line(
                &mut out,
                &format!("{EXPORT_INDENT}export {}=\"{}\"", var.name, var.placeholder),
            );
        }
        if let Some(url) = &integration.hint_url {
            line(&mut out, &format!("{EXPORT_INDENT}(Create at: {url})"));
        }
    }
    out.push('\n');

    line(
        &mut out,
        &format!(
            "{INDENT}Run {} for detailed configuration instructions.",
            banner.help_command
        ),
    );
    out.push('\n');
    line(&mut out, &rule);

    out
}

fn line(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{text}");
}
