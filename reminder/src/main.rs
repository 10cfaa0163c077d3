use colored::*;
use post_install_reminder::ReminderCli;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = ReminderCli::new();

    if let Err(e) = cli.run(args) {
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
