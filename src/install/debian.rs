//! Debian: copy into the local trust-source directory and rebuild.
//!
//! If update-ca-certificates is absent it is bootstrapped through apt.
//! The bootstrap assumes apt was already configured to reach its mirrors;
//! nothing re-checks that the tool actually landed before the final
//! invocation, which then surfaces the failure on its own.

use anyhow::Result;

use super::{ca_file_name, InstallOutcome};
use crate::paths::TrustPaths;
use crate::system::{CommandRunner, Invocation, TrustFs};

pub fn install(
    paths: &TrustPaths,
    fs: &dyn TrustFs,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    let dest = paths.debian_cert_dir.join(ca_file_name(&paths.root_ca_file)?);
    fs.copy(&paths.root_ca_file, &dest)?;

    if !fs.exists(&paths.debian_update_tool) {
        if !fs.exists(&paths.debian_apt) {
            println!(
                "update-ca-certificates missing, and can't install it because apt is missing. \
                 Not installing certs."
            );
            return Ok(InstallOutcome::PackageManagerMissing);
        }

        // A failed index refresh can still leave the install below able
        // to succeed, so its exit status is ignored.
        runner.run(&Invocation::unchecked(&paths.debian_apt, &["update"]))?;
        runner.run(&Invocation::checked(
            &paths.debian_apt,
            &["install", "-y", "ca-certificates"],
        ))?;
    }

    runner.run(&Invocation::checked(&paths.debian_update_tool, &[]))?;
    println!(
        "[trust:debian] installed '{}' into '{}'",
        paths.root_ca_file.display(),
        paths.debian_cert_dir.display()
    );
    Ok(InstallOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::fakes::{FakeFs, FakeRunner};

    fn fs_with_ca(paths: &TrustPaths) -> FakeFs {
        let fs = FakeFs::new();
        fs.put(&paths.root_ca_file, b"CERT\n");
        fs
    }

    #[test]
    fn copies_ca_and_runs_rebuild_tool_when_present() {
        let paths = TrustPaths::default();
        let fs = fs_with_ca(&paths);
        fs.put(&paths.debian_update_tool, b"");
        let runner = FakeRunner::new();

        let outcome = install(&paths, &fs, &runner).unwrap();

        assert_eq!(outcome, InstallOutcome::Completed);
        let copied = paths.debian_cert_dir.join("cacert.pem");
        assert_eq!(fs.contents(&copied).unwrap(), b"CERT\n");
        assert_eq!(
            runner.calls(),
            vec![Invocation::checked(&paths.debian_update_tool, &[])]
        );
    }

    #[test]
    fn bootstraps_via_apt_when_rebuild_tool_missing() {
        let paths = TrustPaths::default();
        let fs = fs_with_ca(&paths);
        fs.put(&paths.debian_apt, b"");
        let runner = FakeRunner::new();

        let outcome = install(&paths, &fs, &runner).unwrap();

        assert_eq!(outcome, InstallOutcome::Completed);
        assert_eq!(
            runner.calls(),
            vec![
                Invocation::unchecked(&paths.debian_apt, &["update"]),
                Invocation::checked(&paths.debian_apt, &["install", "-y", "ca-certificates"]),
                Invocation::checked(&paths.debian_update_tool, &[]),
            ]
        );
    }

    #[test]
    fn missing_apt_and_rebuild_tool_reports_package_manager_missing() {
        let paths = TrustPaths::default();
        let fs = fs_with_ca(&paths);
        let runner = FakeRunner::new();

        let outcome = install(&paths, &fs, &runner).unwrap();

        assert_eq!(outcome, InstallOutcome::PackageManagerMissing);
        assert!(runner.calls().is_empty());
        // The copy into the trust-source directory happened before the
        // bootstrap gave up.
        let copied = paths.debian_cert_dir.join("cacert.pem");
        assert_eq!(fs.contents(&copied).unwrap(), b"CERT\n");
    }

    #[test]
    fn failed_apt_install_is_an_error() {
        let paths = TrustPaths::default();
        let fs = fs_with_ca(&paths);
        fs.put(&paths.debian_apt, b"");
        let runner = FakeRunner::new();
        runner.mark_failing(&paths.debian_apt);

        assert!(install(&paths, &fs, &runner).is_err());
        // apt update ran unchecked first; the checked install errored.
        assert_eq!(runner.calls().len(), 2);
    }
}
