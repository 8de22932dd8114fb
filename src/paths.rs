//! Fixed filesystem locations for each supported trust store.

use std::path::PathBuf;

/// Every path the installer touches, gathered in one place.
///
/// `Default` carries the production values; tests substitute paths inside
/// a temp directory. The root CA bundle is supplied to the container ahead
/// of time and is read-only input here.
#[derive(Debug, Clone)]
pub struct TrustPaths {
    /// PEM bundle to install.
    pub root_ca_file: PathBuf,
    /// Release descriptors probed in order; first usable one wins.
    pub release_files: Vec<PathBuf>,

    /// Alpine: consolidated bundle that certificate bytes are appended to.
    pub alpine_bundle: PathBuf,

    /// Debian: directory scanned by update-ca-certificates.
    pub debian_cert_dir: PathBuf,
    /// Debian: trust-rebuild tool.
    pub debian_update_tool: PathBuf,
    /// Debian: package manager used to bootstrap the rebuild tool.
    pub debian_apt: PathBuf,

    /// Fedora: trust anchor source directory.
    pub fedora_anchor_dir: PathBuf,
    /// Fedora: trust-rebuild tool, tier 1 of the fallback chain.
    pub fedora_update_tool: PathBuf,
    /// Fedora: direct anchor tool, tier 2.
    pub fedora_trust_tool: PathBuf,
    /// Fedora: extraction tool, tier 3.
    pub fedora_p11_kit: PathBuf,
    /// Fedora: extracted PEM bundle rebuilt by p11-kit.
    pub fedora_extracted_bundle: PathBuf,
}

impl Default for TrustPaths {
    fn default() -> Self {
        Self {
            root_ca_file: PathBuf::from("/cacert.pem"),
            release_files: vec![
                PathBuf::from("/etc/os-release"),
                PathBuf::from("/usr/lib/os-release"),
            ],
            alpine_bundle: PathBuf::from("/etc/ssl/certs/ca-certificates.crt"),
            debian_cert_dir: PathBuf::from("/usr/local/share/ca-certificates"),
            debian_update_tool: PathBuf::from("/usr/sbin/update-ca-certificates"),
            debian_apt: PathBuf::from("/usr/bin/apt"),
            fedora_anchor_dir: PathBuf::from("/etc/pki/ca-trust/source/anchors"),
            fedora_update_tool: PathBuf::from("/usr/bin/update-ca-trust"),
            fedora_trust_tool: PathBuf::from("/usr/bin/trust"),
            fedora_p11_kit: PathBuf::from("/usr/bin/p11-kit"),
            fedora_extracted_bundle: PathBuf::from(
                "/etc/pki/ca-trust/extracted/pem/tls-ca-bundle.pem",
            ),
        }
    }
}

impl TrustPaths {
    /// Production paths, honoring the `ROOT_CA_FILE` environment override.
    pub fn from_env() -> Self {
        let mut paths = Self::default();
        if let Ok(ca) = std::env::var("ROOT_CA_FILE") {
            if !ca.trim().is_empty() {
                paths.root_ca_file = PathBuf::from(ca);
            }
        }
        paths
    }
}
