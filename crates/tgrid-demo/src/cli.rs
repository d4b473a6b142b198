#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TGRID_*` prefix; explicit flags win over the
//! environment, which wins over defaults.

use std::env;
use std::fmt;
use std::process;
use std::time::Duration;

use tgrid_render::drawing::BorderChars;
use tgrid_runtime::ProgramConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
tgrid demo: a bordered terminal grid with buttons, a cursor, and an echo log

USAGE:
    tgrid-demo [OPTIONS]

OPTIONS:
    --width=N            Grid width in cells, border included (default: 60)
    --height=N           Grid height in cells, border included (default: 12)
    --log-capacity=N     Log messages kept (default: 32)
    --frame-delay-ms=N   Redraw at least every N ms; 0 blocks on input (default: 0)
    --page=N             Start on page N, 0-9 (default: 1)
    --border=STYLE       ascii, square, rounded, double, or heavy (default: ascii)
    --help, -h           Show this help message
    --version, -V        Show version

PAGES:
    1  Main menu         Start, Options, Input, Exit
    2  Options           Back, Ping (once), Hint toggle

KEYBINDINGS:
    w a s d / arrows     Move the cursor
    e / Enter            Press the button under the cursor
    0-9                  Switch page
    q / Esc / Ctrl+C     Quit

ENVIRONMENT VARIABLES:
    TGRID_WIDTH            Override --width
    TGRID_HEIGHT           Override --height
    TGRID_LOG_CAPACITY     Override --log-capacity
    TGRID_FRAME_DELAY_MS   Override --frame-delay-ms
    TGRID_PAGE             Override --page
    TGRID_BORDER           Override --border
    TGRID_LOG_FILE         Write tracing output to this file
    TGRID_LOG              Tracing filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub width: u16,
    pub height: u16,
    pub log_capacity: usize,
    /// Redraw interval in milliseconds (0 = block on input).
    pub frame_delay_ms: u64,
    pub page: u8,
    pub border: BorderChars,
}

impl Default for Opts {
    fn default() -> Self {
        let config = ProgramConfig::default();
        Self {
            width: config.width,
            height: config.height,
            log_capacity: config.log_capacity,
            frame_delay_ms: 0,
            page: config.initial_page,
            border: BorderChars::ASCII,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// A flag or environment value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn parse_border(value: &str) -> Result<BorderChars, CliError> {
    BorderChars::by_name(&value.to_ascii_lowercase()).ok_or_else(|| CliError::InvalidValue {
        flag: "--border",
        value: value.to_string(),
    })
}

impl Opts {
    /// Parse the process arguments and environment, exiting on `--help`,
    /// `--version`, or bad input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("tgrid-demo {VERSION}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with environment lookups through `env`.
    ///
    /// Unparseable environment values are ignored; unparseable flags are
    /// errors.
    pub fn parse_from(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, CliError> {
        let mut opts = Self::default();

        if let Some(n) = env("TGRID_WIDTH").and_then(|v| v.parse().ok()) {
            opts.width = n;
        }
        if let Some(n) = env("TGRID_HEIGHT").and_then(|v| v.parse().ok()) {
            opts.height = n;
        }
        if let Some(n) = env("TGRID_LOG_CAPACITY").and_then(|v| v.parse().ok()) {
            opts.log_capacity = n;
        }
        if let Some(n) = env("TGRID_FRAME_DELAY_MS").and_then(|v| v.parse().ok()) {
            opts.frame_delay_ms = n;
        }
        if let Some(n) = env("TGRID_PAGE").and_then(|v| v.parse().ok()) {
            opts.page = n;
        }
        if let Some(border) = env("TGRID_BORDER").and_then(|v| parse_border(&v).ok()) {
            opts.border = border;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_number("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        opts.height = parse_number("--height", val)?;
                    } else if let Some(val) = other.strip_prefix("--log-capacity=") {
                        opts.log_capacity = parse_number("--log-capacity", val)?;
                    } else if let Some(val) = other.strip_prefix("--frame-delay-ms=") {
                        opts.frame_delay_ms = parse_number("--frame-delay-ms", val)?;
                    } else if let Some(val) = other.strip_prefix("--page=") {
                        opts.page = parse_number("--page", val)?;
                    } else if let Some(val) = other.strip_prefix("--border=") {
                        opts.border = parse_border(val)?;
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }

    /// Program configuration for these options, with the log panel on the
    /// right half of the grid.
    pub fn program_config(&self) -> ProgramConfig {
        let delay = (self.frame_delay_ms > 0).then(|| Duration::from_millis(self.frame_delay_ms));
        ProgramConfig {
            width: self.width,
            height: self.height,
            log_capacity: self.log_capacity,
            log_region: ProgramConfig::right_half_log_region(self.width, self.height),
            log_title: Some("Echo output".to_string()),
            frame_delay: delay,
            initial_page: self.page,
            initial_log: crate::app::STARTUP_LOG.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!((opts.width, opts.height), (60, 12));
        assert_eq!(opts.log_capacity, 32);
        assert_eq!(opts.frame_delay_ms, 0);
        assert_eq!(opts.page, 1);
        assert_eq!(opts.border, BorderChars::ASCII);
    }

    #[test]
    fn flags_parse() {
        let cmd = Opts::parse_from(
            &args(&[
                "--width=40",
                "--height=10",
                "--log-capacity=5",
                "--frame-delay-ms=50",
                "--page=2",
                "--border=rounded",
            ]),
            no_env,
        )
        .unwrap();
        let Command::Run(opts) = cmd else {
            panic!("expected Run, got {cmd:?}");
        };
        assert_eq!((opts.width, opts.height), (40, 10));
        assert_eq!(opts.log_capacity, 5);
        assert_eq!(opts.frame_delay_ms, 50);
        assert_eq!(opts.page, 2);
        assert_eq!(opts.border, BorderChars::ROUNDED);
    }

    #[test]
    fn flags_override_env() {
        let env = |key: &str| match key {
            "TGRID_WIDTH" => Some("70".to_string()),
            "TGRID_HEIGHT" => Some("not a number".to_string()),
            "TGRID_BORDER" => Some("HEAVY".to_string()),
            _ => None,
        };
        let Command::Run(opts) = Opts::parse_from(&args(&["--width=44"]), env).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(opts.width, 44);
        assert_eq!(opts.height, 12, "bad env values are ignored");
        assert_eq!(opts.border, BorderChars::HEAVY);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(Opts::parse_from(&args(&["-h"]), no_env), Ok(Command::Help));
        assert_eq!(
            Opts::parse_from(&args(&["--version"]), no_env),
            Ok(Command::Version)
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            Opts::parse_from(&args(&["--width=wide"]), no_env),
            Err(CliError::InvalidValue {
                flag: "--width",
                value: "wide".into()
            })
        );
        assert_eq!(
            Opts::parse_from(&args(&["--border=dotted"]), no_env),
            Err(CliError::InvalidValue {
                flag: "--border",
                value: "dotted".into()
            })
        );
        assert_eq!(
            Opts::parse_from(&args(&["--fast"]), no_env),
            Err(CliError::UnknownArgument("--fast".into()))
        );
    }

    #[test]
    fn program_config_from_opts() {
        let opts = Opts {
            frame_delay_ms: 25,
            ..Opts::default()
        };
        let config = opts.program_config();
        assert_eq!(config.frame_delay, Some(Duration::from_millis(25)));
        assert_eq!(config.log_region, ProgramConfig::default().log_region);
        assert_eq!(Opts::default().program_config().frame_delay, None);
        assert_eq!(config.initial_log.len(), crate::app::STARTUP_LOG.len());
    }

    #[test]
    fn help_text_mentions_env_vars() {
        assert!(HELP_TEXT.contains("TGRID_LOG_FILE"));
        assert!(HELP_TEXT.contains("TGRID_BORDER"));
        assert!(!VERSION.is_empty());
    }
}
