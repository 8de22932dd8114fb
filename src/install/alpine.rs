//! Alpine: append the CA to the consolidated bundle.
//!
//! Alpine keeps one flattened PEM bundle rather than a source directory
//! plus rebuild tool, so appending the certificate bytes is the whole
//! mechanism. Running the installer twice appends twice; deduplication is
//! out of scope.

use anyhow::Result;

use crate::paths::TrustPaths;
use crate::system::TrustFs;

pub fn install(paths: &TrustPaths, fs: &dyn TrustFs) -> Result<()> {
    let cert = fs.read(&paths.root_ca_file)?;
    fs.append(&paths.alpine_bundle, &cert)?;
    println!(
        "[trust:alpine] appended '{}' to '{}'",
        paths.root_ca_file.display(),
        paths.alpine_bundle.display()
    );
    Ok(())
}
