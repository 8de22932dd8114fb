use anyhow::Result;

use trust_installer::{install, SystemFs, SystemRunner, TrustPaths};

fn main() -> Result<()> {
    let paths = TrustPaths::from_env();
    let outcome = install::run(&paths, &SystemFs, &SystemRunner)?;

    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
