//! Package installer decorator that shows a spinner while the package
//! manager runs.
//!
//! When the package manager's own output is streamed, the spinner is
//! suspended for the duration of the run so the two do not interleave.

use std::path::Path;

use nodekit_adapters::PackageManager;
use nodekit_core::{
    application::ports::{InstallKind, PackageInstaller},
    error::NodekitResult,
};

use crate::output::SpinnerFactory;

pub struct ProgressInstaller<I> {
    inner: I,
    manager: PackageManager,
    spinners: SpinnerFactory,
    streaming: bool,
}

impl<I: PackageInstaller> ProgressInstaller<I> {
    pub fn new(inner: I, manager: PackageManager, spinners: SpinnerFactory) -> Self {
        Self {
            inner,
            manager,
            spinners,
            streaming: false,
        }
    }

    /// The inner installer writes to the terminal itself.
    pub fn streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }
}

impl<I: PackageInstaller> PackageInstaller for ProgressInstaller<I> {
    fn install(
        &self,
        packages: &[&'static str],
        kind: InstallKind,
        root: &Path,
    ) -> NodekitResult<()> {
        let bar = (self.spinners)();
        bar.set_message(format!(
            "Installing {} {kind} package(s) with {}",
            packages.len(),
            self.manager
        ));

        let result = if self.streaming {
            bar.suspend(|| self.inner.install(packages, kind, root))
        } else {
            self.inner.install(packages, kind, root)
        };
        match &result {
            Ok(()) => bar.finish_with_message(format!("Installed {kind} dependencies")),
            Err(_) => bar.abandon_with_message(format!("Installing {kind} dependencies failed")),
        }
        result
    }
}
