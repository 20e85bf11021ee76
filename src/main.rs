use clap::Parser;
use kubehint::cli::{Cli, Commands};
use kubehint::handlers::{self, LintOptions};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Execute a command; `Ok(false)` means findings should fail the process.
fn run(cli: Cli) -> kubehint::Result<bool> {
    match cli.command {
        Commands::Lint {
            paths,
            format,
            rules_version,
            no_fail,
            no_color,
        } => handlers::handle_lint(&LintOptions {
            paths,
            config: cli.config,
            format,
            rules_version,
            no_fail,
            no_color,
        }),
        Commands::Summarize { paths, json } => {
            handlers::handle_summarize(&paths, cli.config.as_deref(), json)?;
            Ok(true)
        }
        Commands::Rules => {
            handlers::handle_rules();
            Ok(true)
        }
    }
}
