//! Demo process supervisor.
//!
//! Fire-and-forget fan-out: every demo starts as its own OS process on its
//! assigned port, nobody waits for readiness, and a shutdown signal tears the
//! whole group down together. A demo that fails to start is logged and left
//! alone; the others keep running. No restarts, no rollback.

use std::path::Path;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{error, info, warn};

use crate::browser;
use crate::config::ProviderConfig;
use crate::demos::DemoSpec;
use crate::error::Result;
use crate::pyenv;

/// How long a child gets to die after the kill signal.
const KILL_GRACE: Duration = Duration::from_secs(5);

/// A demo process under supervision.
struct Supervised {
    name: &'static str,
    child: Child,
}

/// Launch the given demos and supervise them until they all exit or a
/// shutdown signal arrives.
pub async fn run(root: &Path, config: &ProviderConfig, demos: &[DemoSpec]) -> Result<()> {
    pyenv::prepare(root).await?;

    match browser::find_browser() {
        Some(path) => info!("browser found: {}", path.display()),
        None => warn!(
            "no Chrome/Chromium found; PDF rendering in the resume demo will not work"
        ),
    }

    let mut children = Vec::new();
    for demo in demos {
        match spawn_demo(root, config, demo) {
            Ok(child) => {
                info!(
                    "started {} on http://localhost:{} (pid {:?})",
                    demo.label,
                    demo.port,
                    child.id()
                );
                children.push(Supervised { name: demo.name, child });
            }
            Err(e) => {
                // Best-effort fan-out: the others keep going.
                error!("failed to start {}: {}", demo.label, e);
            }
        }
    }

    if children.is_empty() {
        warn!("no demo started");
        return Ok(());
    }

    info!("press Ctrl+C to stop all demos");
    let all_exited = tokio::select! {
        _ = wait_for_shutdown_signal() => false,
        _ = wait_all(&mut children) => true,
    };

    if all_exited {
        info!("all demos exited on their own");
    } else {
        shutdown_all(&mut children).await;
    }
    Ok(())
}

fn spawn_demo(root: &Path, config: &ProviderConfig, demo: &DemoSpec) -> std::io::Result<Child> {
    let mut cmd = Command::new(pyenv::venv_bin(root, "streamlit"));
    cmd.arg("run")
        .arg(demo.script)
        .arg("--server.port")
        .arg(demo.port.to_string())
        .args(["--server.headless", "true"])
        .current_dir(root)
        .kill_on_drop(true);
    for (key, value) in config.env_vars() {
        cmd.env(key, value);
    }
    cmd.spawn()
}

async fn wait_all(children: &mut [Supervised]) {
    futures::future::join_all(children.iter_mut().map(|s| s.child.wait())).await;
}

/// Kill every child, then wait a bounded grace period for each to reap it.
async fn shutdown_all(children: &mut [Supervised]) {
    info!("shutting down {} demo(s)", children.len());
    for s in children.iter_mut() {
        if let Err(e) = s.child.start_kill() {
            // Already gone is fine.
            warn!("kill {}: {}", s.name, e);
        }
    }
    for s in children.iter_mut() {
        match tokio::time::timeout(KILL_GRACE, s.child.wait()).await {
            Ok(Ok(status)) => info!("{} stopped ({status})", s.name),
            Ok(Err(e)) => warn!("waiting for {}: {}", s.name, e),
            Err(_) => warn!("{} did not stop within {:?}", s.name, KILL_GRACE),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C"),
        _ = terminate => info!("received SIGTERM"),
    }
}
