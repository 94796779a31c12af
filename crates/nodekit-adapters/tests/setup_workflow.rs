//! End-to-end setup runs against a real temporary directory.

use nodekit_adapters::{
    LocalFilesystem, MemoryFilesystem, PackageJsonReader, PresetAnswers, RecordingInstaller,
};
use nodekit_core::{
    application::{SetupOptions, SetupService, ports::InstallKind},
    domain::{Answers, QuestionId},
    error::ErrorCategory,
};
use tempfile::TempDir;

fn answers(framework: &str, database: &str, orm: &str) -> Answers {
    Answers::new()
        .with(QuestionId::Framework, framework)
        .with(QuestionId::Database, database)
        .with(QuestionId::Orm, orm)
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), r#"{ "name": "api" }"#).unwrap();
    tmp
}

fn service(answers: Answers, installer: RecordingInstaller) -> SetupService {
    SetupService::new(
        Box::new(PresetAnswers::new(answers)),
        Box::new(PackageJsonReader),
        Box::new(LocalFilesystem),
        Box::new(installer),
    )
}

#[test]
fn mongoose_project_gets_connection_module() {
    let tmp = project();
    let installer = RecordingInstaller::new();

    let report = service(answers("fastify", "mongodb", "mongoose"), installer.clone())
        .run(tmp.path())
        .unwrap();

    assert_eq!(report.project.as_deref(), Some("api"));
    assert_eq!(
        std::fs::read_to_string(tmp.path().join(".env")).unwrap(),
        "DATABASE_URL="
    );
    let module = std::fs::read_to_string(tmp.path().join("src/config/database.ts")).unwrap();
    assert!(module.starts_with("import mongoose from 'mongoose';"));

    let calls = installer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, InstallKind::Runtime);
    assert_eq!(calls[0].root, tmp.path());
}

#[test]
fn relational_database_without_orm_creates_empty_config_dir() {
    let tmp = project();

    service(answers("express", "postgresql", "none"), RecordingInstaller::new())
        .run(tmp.path())
        .unwrap();

    let config = tmp.path().join("src/config");
    assert!(config.is_dir());
    assert_eq!(std::fs::read_dir(config).unwrap().count(), 0);
}

#[test]
fn prisma_schema_is_written() {
    let tmp = project();

    service(answers("nestjs", "mysql", "prisma"), RecordingInstaller::new())
        .run(tmp.path())
        .unwrap();

    let schema = std::fs::read_to_string(tmp.path().join("prisma/schema.prisma")).unwrap();
    assert!(schema.contains(r#"provider = "mysql""#));
}

#[test]
fn missing_manifest_aborts_before_any_write() {
    let tmp = TempDir::new().unwrap();
    let installer = RecordingInstaller::new();

    let err = service(answers("express", "none", "none"), installer.clone())
        .run(tmp.path())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Precondition);
    assert!(!tmp.path().join(".env").exists());
    assert!(installer.calls().is_empty());
}

#[test]
fn failed_dev_install_keeps_files_and_runtime_install() {
    let tmp = project();
    let installer = RecordingInstaller::new().failing_on(InstallKind::Development);

    let err = service(answers("express", "mysql", "typeorm"), installer.clone())
        .run(tmp.path())
        .unwrap_err();

    assert!(err.to_string().contains("development"));
    assert!(tmp.path().join(".env").exists());
    assert_eq!(installer.calls().len(), 2);
}

#[test]
fn skip_install_with_memory_filesystem() {
    let tmp = project();
    let fs = MemoryFilesystem::new();

    let report = SetupService::new(
        Box::new(PresetAnswers::new(Answers::new()).accept_first(true)),
        Box::new(PackageJsonReader),
        Box::new(fs.clone()),
        Box::new(RecordingInstaller::new()),
    )
    .with_options(SetupOptions { skip_install: true })
    .run(tmp.path())
    .unwrap();

    assert_eq!(report.selection.to_string(), "express (database: none, orm: none)");
    assert!(report.installed.is_empty());
    assert_eq!(fs.list_files(), [tmp.path().join(".env")]);
    assert!(!tmp.path().join(".env").exists());
}
