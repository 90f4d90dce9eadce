use std::path::PathBuf;

use clap::Parser;

/// Easel: replay frame sync scenarios against headless collaborators.
#[derive(Parser, Debug)]
#[command(name = "easel", version, about)]
pub struct Args {
    /// Scenario file (JSON) to replay.
    #[arg(required_unless_present = "print_config")]
    pub scenario: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_is_positional() {
        let args = Args::try_parse_from(["easel", "drag.json", "--log-level", "debug"]).unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("drag.json")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(!args.print_config);
    }

    #[test]
    fn print_config_needs_no_scenario() {
        let args = Args::try_parse_from(["easel", "--print-config"]).unwrap();
        assert!(args.print_config);
        assert!(args.scenario.is_none());
    }

    #[test]
    fn scenario_required_otherwise() {
        assert!(Args::try_parse_from(["easel"]).is_err());
    }
}
