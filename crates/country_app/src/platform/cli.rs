use std::time::Duration;

use clap::Parser;
use country_engine::{FetchSettings, DEFAULT_BASE_URL};
use log::LevelFilter;

use super::logging::LogDestination;

/// Look up countries by name and show them as cards.
#[derive(Parser, Debug)]
#[command(name = "country_finder", version)]
pub struct Args {
    /// Base URL of the country API; `/name/{query}` is appended.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_base: String,
    /// Run a single search, print the result and exit instead of opening the UI.
    #[arg(long)]
    pub query: Option<String>,
    /// Where log output goes. Defaults to the log file for the UI and to
    /// stderr for `--query`.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,
    /// Give up connecting after this many seconds. Unset waits forever.
    #[arg(long)]
    pub connect_timeout_secs: Option<u64>,
    /// Give up on the whole request after this many seconds. Unset waits forever.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
}

impl Args {
    pub fn log_destination(&self) -> LogDestination {
        match (self.log, &self.query) {
            (Some(destination), _) => destination,
            (None, Some(_)) => LogDestination::Terminal,
            (None, None) => LogDestination::File,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api_base.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    lookup_logging::parse_level(raw).ok_or_else(|| format!("unknown log level '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_timeouts() {
        let args = Args::parse_from(["country_finder"]);
        let settings = args.fetch_settings();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.request_timeout, None);
        assert!(args.query.is_none());
        assert_eq!(args.log_destination(), LogDestination::File);
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "country_finder",
            "--api-base",
            "http://localhost:9000/v3.1",
            "--query",
            "France",
            "--log",
            "off",
            "--log-level",
            "debug",
            "--request-timeout-secs",
            "7",
        ]);
        let settings = args.fetch_settings();

        assert_eq!(settings.base_url, "http://localhost:9000/v3.1");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(7)));
        assert_eq!(args.query.as_deref(), Some("France"));
        assert_eq!(args.log_destination(), LogDestination::Off);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn single_query_logs_to_terminal_by_default() {
        let args = Args::parse_from(["country_finder", "--query", "France"]);
        assert_eq!(args.log_destination(), LogDestination::Terminal);
    }

    #[test]
    fn explicit_log_destination_wins_in_single_query_mode() {
        let args = Args::parse_from(["country_finder", "--query", "France", "--log", "file"]);
        assert_eq!(args.log_destination(), LogDestination::File);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["country_finder", "--log-level", "loud"]).is_err());
    }
}
