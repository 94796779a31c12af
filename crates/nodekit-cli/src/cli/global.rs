//! Flags shared by every `nodekit` subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    (none)  - warnings and errors only
    -v      - each setup step (manifest, files, installs)
    -vv     - answers, paths and package-manager command lines
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. JSON output is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>). Any value other than
    /// empty, `0`, `false`, `no` or `off` turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE instead of the default locations"
    )]
    pub config: Option<PathBuf>,

    /// `json` prints the setup report (or choices) as JSON on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal (and `output.format` in the config).
    #[default]
    Auto,
    /// Human-readable with colors and a progress spinner.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON on stdout.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}
