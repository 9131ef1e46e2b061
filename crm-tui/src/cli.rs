use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use crm_api::domain::ActivityType;
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::app::TypeFilter;

#[derive(Debug, Parser)]
#[command(name = "crm-tui")]
#[command(about = "Terminal UI for CRM activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured CRM service
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print activities matching the filters and exit
    List {
        /// Only show activities of this type (call, email, meeting, note, task)
        #[arg(long = "type", value_name = "TYPE")]
        activity_type: Option<String>,
        /// Case-insensitive substring to match against descriptions
        #[arg(long, default_value = "")]
        search: String,
        /// Use local in-memory data instead of the CRM service
        #[arg(long)]
        dev: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

/// Parse the `--type` argument. Missing or "all" means no type filter.
pub fn parse_type_filter(raw: Option<&str>) -> Result<TypeFilter> {
    match raw {
        None => Ok(TypeFilter::All),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(TypeFilter::All),
        Some(s) => ActivityType::from_str(s).map(TypeFilter::Only).map_err(|_| {
            let valid: Vec<String> = ActivityType::iter().map(|t| t.to_string()).collect();
            anyhow!("Unknown activity type '{}'. Valid types: all, {}", s, valid.join(", "))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from(["crm-tui", "list", "--type", "call", "--search", "intro"])
            .unwrap();
        match cli.command {
            Commands::List {
                activity_type,
                search,
                dev,
            } => {
                assert_eq!(activity_type.as_deref(), Some("call"));
                assert_eq!(search, "intro");
                assert!(!dev);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn type_filter_argument() {
        assert_eq!(parse_type_filter(None).unwrap(), TypeFilter::All);
        assert_eq!(parse_type_filter(Some("ALL")).unwrap(), TypeFilter::All);
        assert_eq!(
            parse_type_filter(Some("Meeting")).unwrap(),
            TypeFilter::Only(ActivityType::Meeting)
        );
        let err = parse_type_filter(Some("fax")).unwrap_err().to_string();
        assert!(err.contains("call, email, meeting, note, task"));
    }
}
