//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nodekit_adapters::PackageManager;
use nodekit_core::domain::{Database, Framework, Orm};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "nodekit",
    bin_name = "nodekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Set up a Node.js backend: framework, database and ORM",
    long_about = "nodekit installs the packages and writes the starter files for a \
                  framework, database and ORM combination in an existing Node.js project.",
    after_help = "EXAMPLES:\n\
        \x20 nodekit setup\n\
        \x20 nodekit setup --framework fastify --database mongodb --orm mongoose\n\
        \x20 nodekit setup --yes --skip-install --dir ./api\n\
        \x20 nodekit choices --database postgresql",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask for framework, database and ORM, then install and write files.
    #[command(
        visible_alias = "s",
        about = "Set up the project in the current directory",
        after_help = "EXAMPLES:\n\
            \x20 nodekit setup                                   # interactive\n\
            \x20 nodekit setup -f express -d postgresql -o prisma\n\
            \x20 nodekit setup --dry-run --output-format json\n\
            \x20 nodekit setup --package-manager pnpm"
    )]
    Setup(SetupArgs),

    /// List the valid choices for each question.
    #[command(
        visible_alias = "ls",
        about = "List frameworks, databases and ORMs",
        after_help = "EXAMPLES:\n\
            \x20 nodekit choices\n\
            \x20 nodekit choices --database mongodb\n\
            \x20 nodekit choices --format json"
    )]
    Choices(ChoicesArgs),

    /// Initialise a nodekit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 nodekit init           # user config directory\n\
            \x20 nodekit init --local   # .nodekit.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nodekit completions bash > ~/.local/share/bash-completion/completions/nodekit\n\
            \x20 nodekit completions zsh  > ~/.zfunc/_nodekit\n\
            \x20 nodekit completions fish > ~/.config/fish/completions/nodekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the nodekit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nodekit config get install.package_manager\n\
            \x20 nodekit config list\n\
            \x20 nodekit config path"
    )]
    Config(ConfigCommands),
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `nodekit setup`.
///
/// Any of framework, database and ORM left unset falls back to the config
/// defaults, then to a prompt (or the first choice with `--yes`).
#[derive(Debug, Args)]
pub struct SetupArgs {
    #[arg(short = 'f', long = "framework", value_enum, help = "Web framework")]
    pub framework: Option<FrameworkArg>,

    #[arg(short = 'd', long = "database", value_enum, help = "Database")]
    pub database: Option<DatabaseArg>,

    #[arg(short = 'o', long = "orm", value_enum, help = "ORM / query builder")]
    pub orm: Option<OrmArg>,

    #[arg(
        short = 'p',
        long = "package-manager",
        value_enum,
        help = "Package manager used to install dependencies (default: yarn)"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Write files only; do not run the package manager.
    #[arg(long = "skip-install", help = "Write files without installing packages")]
    pub skip_install: bool,

    /// Show what would be installed and written without touching anything.
    #[arg(long = "dry-run", help = "Show the plan without applying it")]
    pub dry_run: bool,

    /// Never prompt: unanswered questions take their first choice.
    #[arg(short = 'y', long = "yes", help = "Accept the first choice for unanswered questions")]
    pub yes: bool,

    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Project directory containing package.json (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

// ── choices ───────────────────────────────────────────────────────────────────

/// Arguments for `nodekit choices`.
#[derive(Debug, Args)]
pub struct ChoicesArgs {
    /// Only list the ORMs offered for this database.
    #[arg(short = 'd', long = "database", value_enum, help = "Show ORMs for this database")]
    pub database: Option<DatabaseArg>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ChoicesFormat,
}

/// Output format for the `choices` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChoicesFormat {
    /// Choices with the packages each one installs.
    Table,
    /// One `question=choice` per line.
    List,
    /// JSON object keyed by question.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `nodekit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.nodekit.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nodekit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `nodekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FrameworkArg {
    Express,
    Fastify,
    /// Also accepted as `nest`.
    #[value(alias = "nest")]
    NestJs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseArg {
    None,
    #[value(alias = "mongo")]
    MongoDb,
    #[value(alias = "postgres", alias = "pg")]
    PostgreSql,
    MySql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrmArg {
    None,
    Mongoose,
    Prisma,
    TypeOrm,
    Sequelize,
    Knex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Yarn,
    Npm,
    Pnpm,
}

// ── conversions CLI → core ────────────────────────────────────────────────────

impl From<FrameworkArg> for Framework {
    fn from(arg: FrameworkArg) -> Self {
        match arg {
            FrameworkArg::Express => Framework::Express,
            FrameworkArg::Fastify => Framework::Fastify,
            FrameworkArg::NestJs => Framework::NestJs,
        }
    }
}

impl From<DatabaseArg> for Database {
    fn from(arg: DatabaseArg) -> Self {
        match arg {
            DatabaseArg::None => Database::None,
            DatabaseArg::MongoDb => Database::MongoDb,
            DatabaseArg::PostgreSql => Database::PostgreSql,
            DatabaseArg::MySql => Database::MySql,
        }
    }
}

impl From<OrmArg> for Orm {
    fn from(arg: OrmArg) -> Self {
        match arg {
            OrmArg::None => Orm::None,
            OrmArg::Mongoose => Orm::Mongoose,
            OrmArg::Prisma => Orm::Prisma,
            OrmArg::TypeOrm => Orm::TypeOrm,
            OrmArg::Sequelize => Orm::Sequelize,
            OrmArg::Knex => Orm::Knex,
        }
    }
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Yarn => PackageManager::Yarn,
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
