//! Dispatch from classified distribution to installation routine.
//!
//! Each supported family gets its own module; `Unknown` installs nothing.
//! Routines report a terminal [`InstallOutcome`] instead of exiting the
//! process, so they stay testable against the fake seams.

pub mod alpine;
pub mod debian;
pub mod fedora;

use anyhow::{bail, Result};
use std::ffi::OsStr;
use std::path::Path;

use crate::distro::{classify, read_release_descriptor, Distro};
use crate::paths::TrustPaths;
use crate::system::{CommandRunner, TrustFs};

/// Terminal result of an installation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Trust store updated, or nothing to do.
    Completed,
    /// Debian bootstrap found no package manager.
    PackageManagerMissing,
    /// Fedora fallback chain ran out of tools.
    AnchorToolingMissing,
}

impl InstallOutcome {
    /// Process exit code the binary reports for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            InstallOutcome::Completed => 0,
            InstallOutcome::PackageManagerMissing => 1,
            InstallOutcome::AnchorToolingMissing => 2,
        }
    }
}

/// Full provisioning run: probe the release descriptors, classify, and
/// dispatch to the matching installation routine.
///
/// A host with no usable descriptor installs nothing and completes; that
/// is a success, not an error.
pub fn run(
    paths: &TrustPaths,
    fs: &dyn TrustFs,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    let Some(contents) = read_release_descriptor(fs, &paths.release_files)? else {
        println!("Could not identify distro, so did not install certs.");
        return Ok(InstallOutcome::Completed);
    };

    let distro = classify(&contents);
    println!("[trust] identified distro family: {distro}");
    install_for_distro(distro, paths, fs, runner)
}

/// Install the root CA using the mechanism for `distro`.
pub fn install_for_distro(
    distro: Distro,
    paths: &TrustPaths,
    fs: &dyn TrustFs,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    match distro {
        Distro::Alpine => alpine::install(paths, fs).map(|_| InstallOutcome::Completed),
        Distro::Debian => debian::install(paths, fs, runner),
        Distro::Fedora => fedora::install(paths, fs, runner),
        Distro::Unknown => Ok(InstallOutcome::Completed),
    }
}

/// File name component of the root CA path, for copies into trust-source
/// directories.
pub(crate) fn ca_file_name(root_ca_file: &Path) -> Result<&OsStr> {
    match root_ca_file.file_name() {
        Some(name) => Ok(name),
        None => bail!(
            "root CA path '{}' has no file name",
            root_ca_file.display()
        ),
    }
}
