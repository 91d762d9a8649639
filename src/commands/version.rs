//! Version command implementation

use crate::error::Result;
use crate::installer::ARTIFACTS;

/// Run version command
pub fn run() -> Result<()> {
    println!("archon-install {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!(
        "  Installs: {}",
        ARTIFACTS
            .iter()
            .map(|a| a.file_name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
