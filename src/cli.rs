use crate::analyzer::kubehint::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubehint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Best-practice hints for Kubernetes manifests")]
#[command(long_about = "Lints Kubernetes manifests against a built-in set of best-practice rules and reports errors, warnings and suggestions per document.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint manifest files or directories (`-` reads stdin)
    Lint {
        /// Files or directories to lint
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Kubernetes version passed to the rules
        #[arg(long, value_name = "VERSION")]
        rules_version: Option<String>,

        /// Always exit with status 0, even when errors are found
        #[arg(long)]
        no_fail: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Describe workloads together with their Services and volumes
    Summarize {
        /// Files or directories to summarize
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Output summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered rules by kind and version
    Rules,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lint_command() {
        let cli = Cli::try_parse_from([
            "kubehint", "-vv", "lint", "a.yaml", "k8s/", "--format", "github", "--no-fail",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Lint {
                paths,
                format,
                no_fail,
                rules_version,
                ..
            } => {
                assert_eq!(paths, vec![PathBuf::from("a.yaml"), PathBuf::from("k8s/")]);
                assert_eq!(format, Some(OutputFormat::GitHub));
                assert!(no_fail);
                assert_eq!(rules_version, None);
            }
            _ => panic!("expected lint command"),
        }
    }

    #[test]
    fn test_lint_requires_paths() {
        assert!(Cli::try_parse_from(["kubehint", "lint"]).is_err());
    }
}
