//! Root CA installation into Linux distribution trust stores.
//!
//! Containers and VMs behind a TLS-intercepting proxy need the proxy's
//! root CA trusted before anything else runs. This crate fingerprints the
//! host distribution from its os-release descriptor and drives the
//! distribution's own trust-store mechanism:
//!
//! - **Alpine** - append the CA to the consolidated bundle
//! - **Debian** - drop the CA into the local trust-source directory and
//!   run update-ca-certificates, bootstrapping it via apt if missing
//! - **Fedora** - drop the CA into the anchors directory and register it
//!   through a three-tier fallback chain
//!
//! # Architecture
//!
//! ```text
//! trust-installer (bin)
//!     │
//!     ├── distro   - Distro enum, pure classification, descriptor probing
//!     ├── paths    - TrustPaths: every fixed location, Default = production
//!     ├── system   - TrustFs / CommandRunner seams + std-backed impls
//!     └── install  - orchestration, per-distro routines, exit-code mapping
//! ```
//!
//! Classification is pure; every side effect goes through the [`TrustFs`]
//! and [`CommandRunner`] seams so routines are tested against in-memory
//! fakes. The run is strictly sequential and deliberately non-idempotent
//! on Alpine (re-running appends the certificate again).
//!
//! # Example
//!
//! ```rust,ignore
//! use trust_installer::{install, SystemFs, SystemRunner, TrustPaths};
//!
//! let paths = TrustPaths::from_env();
//! let outcome = install::run(&paths, &SystemFs, &SystemRunner)?;
//! std::process::exit(outcome.exit_code());
//! ```

pub mod distro;
pub mod install;
pub mod paths;
pub mod system;

pub use distro::{classify, read_release_descriptor, Distro};
pub use install::{install_for_distro, InstallOutcome};
pub use paths::TrustPaths;
pub use system::{CommandRunner, Invocation, SystemFs, SystemRunner, TrustFs};
