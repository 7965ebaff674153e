use std::{env, env::VarError};

/// The server takes no arguments, so any argument means someone wants help.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // Only names on this list are printed, so secret-bearing variables cannot leak into a terminal log
    const DISPLAY_ENVS: [&str; 5] =
        ["RUST_LOG", "VCN_HOST", "VCN_PORT", "VCN_DATABASE_URL", "VCN_MAX_DB_CONNECTIONS"];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<25} {val:<15}");
    })
}
