mod cmd;

use std::process::ExitCode;

use clap::Parser;
use cmd::config::{DemoArgs, Effective};
use cmd::error::DemoError;

/// Flatten a record into a mapping and populate another one from it.
#[derive(Parser)]
#[command(name = "fieldmap-demo")]
struct Cli {
    #[command(flatten)]
    args: DemoArgs,
}

fn main() -> ExitCode {
    // stdout carries the demo output, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(config = %cli.args.config, "starting");

    match execute(&cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &DemoArgs) -> Result<(), DemoError> {
    let eff = Effective::new(args)?;
    cmd::run::run(&eff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "fieldmap-demo",
            "--config",
            "demo.toml",
            "--name",
            "Kolya",
            "--age",
            "-3",
            "--average-mark",
            "3.5",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.args.config, "demo.toml");
        assert_eq!(cli.args.name.as_deref(), Some("Kolya"));
        assert_eq!(cli.args.age, Some(-3));
        assert_eq!(cli.args.average_mark, Some(3.5));
        assert!(cli.args.json);
        assert!(cli.args.comment.is_none());
    }

    #[test]
    fn rejects_non_numeric_age() {
        assert!(Cli::try_parse_from(["fieldmap-demo", "--age", "twenty"]).is_err());
    }

    #[test]
    fn unreadable_config_fails_execution() {
        let dir = tempfile::tempdir().unwrap();
        let args = DemoArgs {
            config: dir.path().to_str().unwrap().to_string(),
            ..DemoArgs::default()
        };

        assert!(matches!(execute(&args), Err(DemoError::Config(_))));
    }
}
