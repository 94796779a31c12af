//! Integration tests for nodekit-core through its public API.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use nodekit_core::application::ApplicationError;
use nodekit_core::prelude::*;

#[derive(Default)]
struct FakeFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<Vec<PathBuf>>,
}

impl Filesystem for &'static FakeFs {
    fn create_dir_all(&self, path: &Path) -> NodekitResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> NodekitResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

struct Fixed(Answers);

impl Prompter for Fixed {
    fn ask(&self, question: &Question) -> NodekitResult<String> {
        self.0
            .get(question.id)
            .map(str::to_string)
            .ok_or_else(|| {
                ApplicationError::PromptFailed {
                    question: question.id.to_string(),
                    reason: "no answer".into(),
                }
                .into()
            })
    }
}

struct Manifest(bool);

impl ManifestReader for Manifest {
    fn read(&self, root: &Path) -> NodekitResult<PackageManifest> {
        if self.0 {
            Ok(PackageManifest::default())
        } else {
            Err(ApplicationError::ManifestUnavailable {
                path: root.join("package.json"),
                reason: "not found".into(),
            }
            .into())
        }
    }
}

#[derive(Default)]
struct Calls(Mutex<Vec<(InstallKind, Vec<&'static str>)>>);

impl PackageInstaller for &'static Calls {
    fn install(&self, packages: &[&'static str], kind: InstallKind, _: &Path) -> NodekitResult<()> {
        self.0.lock().unwrap().push((kind, packages.to_vec()));
        Ok(())
    }
}

fn leak<T: Default>() -> &'static T {
    Box::leak(Box::default())
}

fn answers(framework: &str, database: &str, orm: &str) -> Answers {
    Answers::new()
        .with(QuestionId::Framework, framework)
        .with(QuestionId::Database, database)
        .with(QuestionId::Orm, orm)
}

#[test]
fn test_full_setup_workflow() {
    let fs: &'static FakeFs = leak();
    let calls: &'static Calls = leak();

    let service = SetupService::new(
        Box::new(Fixed(answers("nestjs", "postgresql", "prisma"))),
        Box::new(Manifest(true)),
        Box::new(fs),
        Box::new(calls),
    );

    let report = service.run("/project").unwrap();
    assert!(report.applied);

    let files = fs.files.lock().unwrap();
    assert_eq!(files[Path::new("/project/.env")], "DATABASE_URL=");
    assert!(files[Path::new("/project/prisma/schema.prisma")].contains("postgresql"));
    assert!(fs.dirs.lock().unwrap().contains(&PathBuf::from("/project/prisma")));

    let calls = calls.0.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, InstallKind::Runtime);
    assert!(calls[0].1.contains(&"@prisma/client"));
    assert_eq!(calls[1], (InstallKind::Development, vec!["ts-node", "ts-node-dev"]));
}

#[test]
fn test_missing_manifest_leaves_project_untouched() {
    let fs: &'static FakeFs = leak();
    let calls: &'static Calls = leak();

    let service = SetupService::new(
        Box::new(Fixed(answers("express", "mysql", "sequelize"))),
        Box::new(Manifest(false)),
        Box::new(fs),
        Box::new(calls),
    );

    let err = service.run("/project").unwrap_err();
    assert_eq!(err.category(), nodekit_core::error::ErrorCategory::Precondition);
    assert!(fs.files.lock().unwrap().is_empty());
    assert!(fs.dirs.lock().unwrap().is_empty());
    assert!(calls.0.lock().unwrap().is_empty());
}

#[test]
fn test_unknown_answer_is_a_validation_error() {
    let service = SetupService::new(
        Box::new(Fixed(answers("koa", "none", "none"))),
        Box::new(Manifest(true)),
        Box::new(leak::<FakeFs>()),
        Box::new(leak::<Calls>()),
    );

    let err = service.run("/project").unwrap_err();
    assert_eq!(err.category(), nodekit_core::error::ErrorCategory::Validation);
    assert!(err.to_string().contains("koa"));
}

#[test]
fn test_builder_and_answers_agree() {
    let built = Selection::builder()
        .framework(Framework::Express)
        .database(Database::MySql)
        .orm(Orm::Sequelize)
        .unwrap()
        .build()
        .unwrap();

    let parsed = Selection::try_from(&answers("express", "mysql", "sequelize")).unwrap();
    assert_eq!(built, parsed);
}
