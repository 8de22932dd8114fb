//! Linux distribution fingerprinting from os-release descriptors.
//!
//! Classification is a pure function of release-file contents so it can be
//! tested without a filesystem; locating the release file goes through the
//! [`TrustFs`] seam.

use anyhow::Result;
use std::fmt;
use std::path::Path;

use crate::system::TrustFs;

/// Host distribution family.
///
/// Produced once per run by [`classify`] and consumed immediately by the
/// installation dispatch. Distributions outside the three supported
/// families classify as `Unknown`, which installs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Unknown,
    Alpine,
    Debian,
    Fedora,
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distro::Unknown => write!(f, "unknown"),
            Distro::Alpine => write!(f, "alpine"),
            Distro::Debian => write!(f, "debian"),
            Distro::Fedora => write!(f, "fedora"),
        }
    }
}

/// Classify release-descriptor contents into a distribution family.
///
/// Matching is case-insensitive substring membership over the whole file,
/// so both `ID=alpine` and `NAME="Alpine Linux"` match. Derivative
/// distributions can mention more than one keyword; `debian` is checked
/// before `alpine` before `fedora` and the first match wins.
pub fn classify(contents: &str) -> Distro {
    let contents = contents.to_lowercase();
    if contents.contains("debian") {
        Distro::Debian
    } else if contents.contains("alpine") {
        Distro::Alpine
    } else if contents.contains("fedora") {
        Distro::Fedora
    } else {
        Distro::Unknown
    }
}

/// Read the first usable release descriptor from `candidates`.
///
/// A candidate is usable when it exists and holds more than whitespace.
/// Returns `Ok(None)` when no candidate qualifies; the caller decides how
/// to report that.
pub fn read_release_descriptor(
    fs: &dyn TrustFs,
    candidates: &[impl AsRef<Path>],
) -> Result<Option<String>> {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !fs.exists(candidate) {
            continue;
        }
        let contents = fs.read_to_string(candidate)?;
        if !contents.trim().is_empty() {
            return Ok(Some(contents));
        }
    }
    Ok(None)
}
