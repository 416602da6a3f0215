//! Command module structure for the bento CLI

use anyhow::Result;

pub mod lint;
pub mod validate;

/// Print version and build information.
pub fn version() -> Result<()> {
    println!("bento {}", env!("CARGO_PKG_VERSION"));

    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);

    Ok(())
}
