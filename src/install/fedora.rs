//! Fedora: copy into the anchor directory, then register the anchor.
//!
//! Registration tries three mechanisms in strict order: update-ca-trust,
//! `trust anchor`, and a p11-kit rebuild of the extracted bundle. All of
//! them run with exit-status validation off; only a completely empty
//! toolbox is terminal.

use anyhow::Result;

use super::{ca_file_name, InstallOutcome};
use crate::paths::TrustPaths;
use crate::system::{CommandRunner, Invocation, TrustFs};

pub fn install(
    paths: &TrustPaths,
    fs: &dyn TrustFs,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    let dest = paths
        .fedora_anchor_dir
        .join(ca_file_name(&paths.root_ca_file)?);
    fs.copy(&paths.root_ca_file, &dest)?;

    // Tier 1: the stock rebuild tool is final whatever its exit status.
    if fs.exists(&paths.fedora_update_tool) {
        runner.run(&Invocation::unchecked(&paths.fedora_update_tool, &[]))?;
        println!(
            "[trust:fedora] ran '{}' after anchoring '{}'",
            paths.fedora_update_tool.display(),
            paths.root_ca_file.display()
        );
        return Ok(InstallOutcome::Completed);
    }

    if !fs.exists(&paths.fedora_trust_tool) {
        // Tier 3: rebuild the extracted bundle before anchoring.
        if !fs.exists(&paths.fedora_p11_kit) {
            println!("Couldn't attempt Fedora install approach 3 because p11-kit was missing.");
            return Ok(InstallOutcome::AnchorToolingMissing);
        }
        let extracted = paths.fedora_extracted_bundle.display().to_string();
        runner.run(&Invocation::unchecked(
            &paths.fedora_p11_kit,
            &[
                "extract",
                "--comment",
                "--format=pem-bundle",
                "--filter=certificates",
                "--overwrite",
                "--purpose",
                "server-auth",
                &extracted,
            ],
        ))?;
    }

    // TODO: when we only got here through the p11-kit rebuild, the guard
    // above already found `trust` missing and this spawn fails. Decide with
    // the owners whether the rebuild should be terminal instead; keeping
    // the long-standing behavior until then.
    let ca = paths.root_ca_file.display().to_string();
    runner.run(&Invocation::unchecked(
        &paths.fedora_trust_tool,
        &["anchor", &ca],
    ))?;
    println!(
        "[trust:fedora] anchored '{}' via '{}'",
        paths.root_ca_file.display(),
        paths.fedora_trust_tool.display()
    );
    Ok(InstallOutcome::Completed)
}
