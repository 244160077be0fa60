use std::{env, env::VarError};

/// Prints the help text and the current configuration if any argument was given. Returns `true` in that case, and
/// the server should not start.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_help();
        display_config_vars();
    }
    has_cli_args
}

fn display_help() {
    const HELP: &str = include_str!("./cli-help.txt");
    println!("\n{HELP}\n");
}

fn display_config_vars() {
    const CONFIG_VARS: [&str; 5] =
        ["RUST_LOG", "DUKAAN_HOST", "DUKAAN_PORT", "DUKAAN_DATABASE_URL", "DUKAAN_MAX_CONNECTIONS"];

    println!("Current environment values:");
    for name in CONFIG_VARS {
        println!("  {name:<35} {:<15}", config_value(name));
    }
}

fn config_value(name: &str) -> String {
    match env::var(name) {
        Ok(s) => s,
        Err(VarError::NotPresent) => "Not set".into(),
        Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
    }
}
