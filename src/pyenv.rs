//! Python virtual environment preparation.
//!
//! The demos run inside a local `.venv`. The venv is created once, but the
//! dependency set is reinstalled on every run so manifest changes always take
//! effect. Any failure here is fatal: no demo launches on a broken env.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::info;

use crate::error::{Error, Result};

pub const VENV_DIR: &str = ".venv";
pub const REQUIREMENTS: &str = "requirements.txt";

/// Path to an executable inside the venv's bin directory.
pub fn venv_bin(root: &Path, name: &str) -> PathBuf {
    #[cfg(windows)]
    let bin = root.join(VENV_DIR).join("Scripts").join(name);
    #[cfg(not(windows))]
    let bin = root.join(VENV_DIR).join("bin").join(name);
    bin
}

/// Create the venv if absent, then install the declared dependency set.
pub async fn prepare(root: &Path) -> Result<()> {
    let venv = root.join(VENV_DIR);
    if !venv.exists() {
        info!("creating virtual environment at {}", venv.display());
        run_step(
            Command::new("python3").args(["-m", "venv", VENV_DIR]).current_dir(root),
            "virtual environment creation",
        )
        .await?;
    }

    info!("installing dependencies from {REQUIREMENTS}");
    run_step(
        Command::new(venv_bin(root, "pip"))
            .args(["install", "-q", "-r", REQUIREMENTS])
            .current_dir(root),
        "dependency install",
    )
    .await
}

async fn run_step(cmd: &mut Command, what: &str) -> Result<()> {
    let status = cmd
        .status()
        .await
        .map_err(|e| Error::Environment(format!("{what}: {e}")))?;
    if !status.success() {
        return Err(Error::Environment(format!(
            "{what} exited with status {}",
            status.code().unwrap_or(-1)
        )));
    }
    Ok(())
}
