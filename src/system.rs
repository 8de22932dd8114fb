//! Capability seams for filesystem access and child-process invocation.
//!
//! Installation routines never touch `std::fs` or `std::process` directly;
//! they go through [`TrustFs`] and [`CommandRunner`] so tests can substitute
//! in-memory fakes and assert exactly which invocations ran. The production
//! implementations are thin std wrappers.

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One child-process invocation.
///
/// `check_status` records whether a non-zero exit is an error or is
/// deliberately ignored. Most trust-tool invocations run unvalidated; the
/// flag makes that choice explicit per call site instead of swallowing
/// results silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub check_status: bool,
}

impl Invocation {
    /// Invocation whose exit status is ignored. Spawn failures still error.
    pub fn unchecked(program: &Path, args: &[&str]) -> Self {
        Self {
            program: program.to_path_buf(),
            args: args.iter().map(|a| a.to_string()).collect(),
            check_status: false,
        }
    }

    /// Invocation that must exit successfully.
    pub fn checked(program: &Path, args: &[&str]) -> Self {
        Self {
            check_status: true,
            ..Self::unchecked(program, args)
        }
    }
}

/// Filesystem operations needed by the installer.
pub trait TrustFs {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
    /// Append `bytes` to `path`, creating the file if absent.
    fn append(&self, path: &Path, bytes: &[u8]) -> Result<()>;
    fn copy(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// Child-process execution.
pub trait CommandRunner {
    /// Run `invocation` to completion in the installer's working directory.
    ///
    /// Spawn failures are always errors; a non-zero exit is an error only
    /// when the invocation asks for validation.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Production filesystem backed by `std::fs`.
pub struct SystemFs;

impl TrustFs for SystemFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("reading '{}'", path.display()))
    }

    fn append(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening '{}' for append", path.display()))?;
        file.write_all(bytes)
            .with_context(|| format!("appending to '{}'", path.display()))
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<()> {
        std::fs::copy(src, dst).with_context(|| {
            format!("copying '{}' -> '{}'", src.display(), dst.display())
        })?;
        Ok(())
    }
}

/// Production runner backed by `std::process::Command`.
///
/// Children inherit the installer's working directory and stdio, so tool
/// output lands on the same stdout the installer writes to. No timeouts are
/// applied; a hung tool stalls the run.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| format!("spawning '{}'", invocation.program.display()))?;

        if invocation.check_status && !status.success() {
            bail!(
                "'{}' failed with {}",
                invocation.program.display(),
                status
            );
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod fakes {
    //! In-memory doubles for the two seams, shared by unit tests.

    use super::{CommandRunner, Invocation, TrustFs};
    use anyhow::{bail, Result};
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    /// Filesystem held in a map from path to bytes.
    #[derive(Default)]
    pub struct FakeFs {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    }

    impl FakeFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn put(&self, path: impl Into<PathBuf>, bytes: &[u8]) {
            self.files.borrow_mut().insert(path.into(), bytes.to_vec());
        }

        pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl TrustFs for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            let bytes = self.read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }

        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            match self.files.borrow().get(path) {
                Some(bytes) => Ok(bytes.clone()),
                None => bail!("file not found: {}", path.display()),
            }
        }

        fn append(&self, path: &Path, bytes: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .entry(path.to_path_buf())
                .or_default()
                .extend_from_slice(bytes);
            Ok(())
        }

        fn copy(&self, src: &Path, dst: &Path) -> Result<()> {
            let bytes = self.read(src)?;
            self.files.borrow_mut().insert(dst.to_path_buf(), bytes);
            Ok(())
        }
    }

    /// Runner that records every attempted invocation.
    ///
    /// Programs marked missing fail at spawn; programs marked failing exit
    /// non-zero, which only errors for checked invocations.
    #[derive(Default)]
    pub struct FakeRunner {
        calls: RefCell<Vec<Invocation>>,
        missing: RefCell<HashSet<PathBuf>>,
        failing: RefCell<HashSet<PathBuf>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn mark_missing(&self, program: impl Into<PathBuf>) {
            self.missing.borrow_mut().insert(program.into());
        }

        pub fn mark_failing(&self, program: impl Into<PathBuf>) {
            self.failing.borrow_mut().insert(program.into());
        }

        pub fn calls(&self) -> Vec<Invocation> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, invocation: &Invocation) -> Result<()> {
            self.calls.borrow_mut().push(invocation.clone());

            if self.missing.borrow().contains(&invocation.program) {
                bail!("spawning '{}': no such file", invocation.program.display());
            }
            if invocation.check_status && self.failing.borrow().contains(&invocation.program) {
                bail!("'{}' failed with exit status 1", invocation.program.display());
            }
            Ok(())
        }
    }
}
