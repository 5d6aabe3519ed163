use anyhow::Context;
use autompg::config::Config;
use autompg::fetch::HttpSource;
use autompg::{logging, report, AutoMpgData, SortOrder};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "autompg")]
#[command(about = "analyze Auto MPG data set")]
#[command(version = "0.1.0")]
struct Cli {
    /// Sort order for the automobile list
    #[arg(short, long, value_name = "sort order", value_enum, ignore_case = true)]
    sort: SortOrder,

    /// Path to a TOML config file (defaults to ./autompg.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Action to run on the sorted list
    #[arg(value_name = "command", value_enum)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    /// Print the sorted automobile list
    Print,
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let source = HttpSource::from_config(config).context("building HTTP client")?;
    let mut data = AutoMpgData::load(config, &source).context("loading Auto MPG data")?;
    info!("Loaded {} records, sorting by {}", data.len(), cli.sort);

    data.sort(cli.sort);

    match cli.command {
        Command::Print => {
            let stdout = std::io::stdout();
            report::write_report(&data, stdout.lock()).context("writing report")?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Usage errors exit here, before any logging or loading happens
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let _logging = logging::init_logging(&config.logging).context("initializing logging")?;

    run(cli, &config).map_err(|e| {
        error!("{:#}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_sort_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["autompg", "--sort", "YEAR", "print"]).unwrap();
        assert_eq!(cli.sort, SortOrder::Year);
        assert!(matches!(cli.command, Command::Print));

        let cli = Cli::try_parse_from(["autompg", "-s", "Mpg", "print"]).unwrap();
        assert_eq!(cli.sort, SortOrder::Mpg);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_sort_is_usage_error() {
        let err = Cli::try_parse_from(["autompg", "print"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let err = Cli::try_parse_from(["autompg", "--sort", "weight", "print"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_print_is_the_only_command() {
        assert!(Cli::try_parse_from(["autompg", "--sort", "default"]).is_err());
        let err = Cli::try_parse_from(["autompg", "--sort", "default", "show"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_config_path_is_accepted() {
        let cli = Cli::try_parse_from(["autompg", "--config", "cfg/autompg.toml", "--sort", "default", "print"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg/autompg.toml")));
    }
}
