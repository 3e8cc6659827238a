use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use yaml_path::config::Config;
use yaml_path::file::loader::load_source;
use yaml_path::path_at_point;
use yaml_path::yamlpath::{Locator, PathFormat, SlashOptions};

/// yaml-path - Print the path of the YAML token under a cursor
#[derive(Parser, Debug)]
#[command(name = "yaml-path")]
#[command(version)]
#[command(
    about = "Reads yaml and outputs the path to the leftmost token at line, or at (line, col)",
    long_about = None
)]
struct Cli {
    /// Cursor line (1-based)
    #[arg(long)]
    line: usize,

    /// Cursor column (1-based), zero to match the leftmost token on the line
    #[arg(long, default_value_t = 0)]
    col: usize,

    /// YAML file to read, empty or "-" means stdin
    #[arg(long)]
    path: Option<PathBuf>,

    /// Output format: "bosh" or "jsonpath"
    #[arg(long)]
    format: Option<String>,

    /// Path separator for bosh format
    #[arg(long = "bosh.sep")]
    separator: Option<String>,

    /// Attribute name used to select sequence elements in bosh format, empty to disable
    #[arg(long = "bosh.name")]
    name_attribute: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Merges command-line overrides onto the configured defaults.
fn slash_options(cli: &Cli, config: &Config) -> SlashOptions {
    let mut options = config.slash_options();
    if let Some(separator) = cli.separator.as_deref().filter(|sep| !sep.is_empty()) {
        options.separator = separator.to_string();
    }
    if let Some(name_attribute) = &cli.name_attribute {
        options.name_attribute = name_attribute.clone();
    }
    options
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::load();

    let format: PathFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.format.as_str())
        .parse()?;
    let formatter = format.formatter(slash_options(&cli, &config));

    let path = cli.path.as_deref().filter(|p| !p.as_os_str().is_empty());
    let source = load_source(path).context("read from file")?;

    let locator = Locator::new(cli.line, cli.col);
    tracing::debug!(%locator, %format, "resolving path");

    path_at_point(&source, &locator, formatter.as_ref()).context("resolve path")
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(path) => {
            println!("{}", path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["yaml-path", "--line", "5"]).unwrap();
        assert_eq!(cli.line, 5);
        assert_eq!(cli.col, 0);
        assert!(cli.path.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_cli_requires_line() {
        assert!(Cli::try_parse_from(["yaml-path"]).is_err());
    }

    #[test]
    fn test_slash_options_overrides() {
        let cli = Cli::try_parse_from([
            "yaml-path",
            "--line",
            "1",
            "--bosh.sep",
            ".",
            "--bosh.name",
            "",
        ])
        .unwrap();
        let options = slash_options(&cli, &Config::default());
        assert_eq!(options.separator, ".");
        assert_eq!(options.name_attribute, "");
    }

    #[test]
    fn test_empty_separator_keeps_configured_one() {
        let cli = Cli::try_parse_from(["yaml-path", "--line", "1", "--bosh.sep", ""]).unwrap();
        let options = slash_options(&cli, &Config::default());
        assert_eq!(options.separator, "/");
        assert_eq!(options.name_attribute, "name");
    }
}
