//! Implementation of the `nodekit setup` command.
//!
//! Responsibility: turn flags and config defaults into preset answers, wire
//! the adapters into a `SetupService`, and display the report. No business
//! logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use nodekit_adapters::{
    CommandInstaller, LocalFilesystem, PackageJsonReader, PackageManager, PresetAnswers,
};
use nodekit_core::{
    application::{
        ApplicationError, SetupOptions, SetupReport, SetupService, ports::PackageInstaller,
    },
    domain::{Answers, Database, Framework, Orm, QuestionId},
    error::NodekitError,
};

use crate::{
    cli::{OutputFormat, SetupArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::ProgressInstaller,
    prompt,
};

/// Execute the `nodekit setup` command.
///
/// 1. Resolve the project directory
/// 2. Merge flags over config defaults into preset answers
/// 3. Pick the prompter for anything still unanswered
/// 4. Run (or preview with `--dry-run`) through `SetupService`
/// 5. Print the report
#[instrument(skip_all)]
pub fn execute(
    args: SetupArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(args.dir.as_deref())?;
    let answers = preset_answers(&args, &config)?;
    let manager = package_manager(&args, &config)?;

    debug!(
        root = %root.display(),
        preset = answers.len(),
        %manager,
        "Setup options resolved"
    );

    let mut prompter = PresetAnswers::new(answers).accept_first(args.yes);
    if !args.yes && !prompter.missing().is_empty() {
        if !prompt::interactive_available() {
            return Err(CliError::FeatureNotAvailable {
                feature: "interactive",
            });
        }
        if std::io::stdin().is_terminal() {
            if let Some(interactive) = prompt::interactive() {
                prompter = prompter.with_fallback(interactive);
            }
        }
    }

    let installer: Box<dyn PackageInstaller> = if output.format() == OutputFormat::Human {
        let streaming = !output.is_quiet();
        Box::new(
            ProgressInstaller::new(
                CommandInstaller::new(manager).stream_stdout(streaming),
                manager,
                output.spinners(),
            )
            .streaming(streaming),
        )
    } else {
        Box::new(CommandInstaller::new(manager))
    };

    let service = SetupService::new(
        Box::new(prompter),
        Box::new(PackageJsonReader::new()),
        Box::new(LocalFilesystem::new()),
        installer,
    )
    .with_options(SetupOptions {
        skip_install: args.skip_install || config.install.skip,
    });

    let report = if args.dry_run {
        service
            .select()
            .and_then(|selection| service.preview(&selection))
    } else {
        info!(root = %root.display(), "Setup started");
        service.run(&root)
    }
    .map_err(into_cli)?;

    show_report(&report, &root, manager, &output)
}

/// A dismissed prompt is a cancellation, not a failure.
fn into_cli(err: NodekitError) -> CliError {
    match err {
        NodekitError::Application(ApplicationError::PromptFailed { ref reason, .. })
            if reason == prompt::CANCELLED =>
        {
            CliError::Cancelled
        }
        other => other.into(),
    }
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn resolve_root(dir: Option<&Path>) -> CliResult<PathBuf> {
    let root = dir.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        return Err(CliError::DirectoryNotFound { path: root });
    }
    Ok(root)
}

/// Flags win over config defaults. Config values are validated here so a
/// typo in the config file is reported as a configuration error.
fn preset_answers(args: &SetupArgs, config: &AppConfig) -> CliResult<Answers> {
    let mut answers = Answers::new();

    let framework = match args.framework {
        Some(f) => Some(Framework::from(f)),
        None => config_default::<Framework>("defaults.framework", &config.defaults.framework)?,
    };
    let database = match args.database {
        Some(d) => Some(Database::from(d)),
        None => config_default::<Database>("defaults.database", &config.defaults.database)?,
    };
    let orm = match args.orm {
        Some(o) => Some(Orm::from(o)),
        None => config_default::<Orm>("defaults.orm", &config.defaults.orm)?,
    };

    if let Some(f) = framework {
        answers.insert(QuestionId::Framework, f.as_str());
    }
    if let Some(d) = database {
        answers.insert(QuestionId::Database, d.as_str());
    }
    if let Some(o) = orm {
        answers.insert(QuestionId::Orm, o.as_str());
    }

    Ok(answers)
}

fn config_default<T>(key: &str, value: &Option<String>) -> CliResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.parse::<T>().map_err(|e| CliError::ConfigError {
                message: format!("invalid value for {key}: {e}"),
                source: Some(Box::new(e)),
            })
        })
        .transpose()
}

fn package_manager(args: &SetupArgs, config: &AppConfig) -> CliResult<PackageManager> {
    match args.package_manager {
        Some(pm) => Ok(pm.into()),
        None => config
            .install
            .package_manager
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid value for install.package_manager: {e}"),
                source: Some(Box::new(e)),
            }),
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn show_report(
    report: &SetupReport,
    root: &Path,
    manager: PackageManager,
    out: &OutputManager,
) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        return out.json(report);
    }

    let deps = &report.dependencies;

    if !report.applied {
        out.header(&format!("Dry run: {}", report.selection))?;
    } else {
        let project = report.project.as_deref().unwrap_or("(unnamed)");
        out.header(&format!("Set up '{project}': {}", report.selection))?;
    }

    out.print("")?;
    out.print("Dependencies:")?;
    out.print(&format!("  runtime:     {}", list_or_none(deps.runtime())))?;
    out.print(&format!("  development: {}", list_or_none(deps.development())))?;

    out.print("")?;
    out.print("Files:")?;
    for entry in report.artifacts.entries() {
        out.print(&format!("  {}", entry.path()))?;
    }
    out.print("")?;

    if !report.applied {
        out.info(&format!(
            "Nothing was written. Packages would be installed with {manager} in {}",
            root.display()
        ))?;
        return Ok(());
    }

    if report.installed.is_empty() && !deps.is_empty() {
        out.warning("Dependencies were not installed (--skip-install)")?;
    }

    out.success("Project setup complete")?;
    out.print("")?;
    out.print("Next steps:")?;
    out.print("  Fill in DATABASE_URL in .env")?;

    Ok(())
}

fn list_or_none(packages: &[&str]) -> String {
    if packages.is_empty() {
        "(none)".into()
    } else {
        packages.join(" ")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
