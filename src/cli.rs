//! Command-line arguments.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Calculator driven one key at a time.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tallykey", version)]
pub struct Cli {
    /// Feed these keys without opening the terminal UI and print the result.
    /// `<` is backspace and `c` clears.
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub eval: Option<String>,

    /// Append logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tallykey::calc=trace`. Defaults to RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Hide the running subtotal.
    #[arg(long)]
    pub no_subtotal: bool,

    /// Hide the key help line.
    #[arg(long)]
    pub no_help: bool,
}

impl Cli {
    /// Default configuration with the flags applied.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.log.file = self.log_file.clone();
        config.log.level = self.log_level.clone();
        config.display.show_subtotal = !self.no_subtotal;
        config.display.show_key_help = !self.no_help;
        config
    }

    pub fn is_headless(&self) -> bool {
        self.eval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tallykey"]).unwrap();
        assert!(!cli.is_headless());
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        let cli = Cli::try_parse_from(["tallykey", "--eval", "-5+3="]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("-5+3="));
        assert!(cli.is_headless());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "tallykey",
            "--log-file",
            "calc.log",
            "--log-level",
            "debug",
            "--no-subtotal",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.log.file, Some(PathBuf::from("calc.log")));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert!(!config.display.show_subtotal);
        assert!(config.display.show_key_help);
    }
}
