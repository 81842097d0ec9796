use std::path::Path;
use std::process::Command;

use crate::browser;
use crate::config::{ProviderConfig, STORE_PATH};
use crate::pyenv;

pub async fn run() -> anyhow::Result<()> {
    println!("🏥 Demo Suite Doctor\n");

    let mut all_ok = true;

    all_ok &= check_python();
    all_ok &= check_store();
    all_ok &= check_venv();
    check_browser();

    println!();
    if all_ok {
        println!("✅ All checks passed! Ready to run the demos.");
    } else {
        println!("⚠️  Some checks failed. Please fix the issues above.");
        std::process::exit(1);
    }

    Ok(())
}

fn check_python() -> bool {
    print!("Checking Python... ");

    match Command::new("python3").arg("--version").output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("✅ {}", version.trim());
            true
        }
        Err(_) => {
            println!("❌ python3 not found. Please install Python 3.10+");
            false
        }
    }
}

fn check_store() -> bool {
    print!("Checking {} ... ", STORE_PATH);

    match ProviderConfig::load(STORE_PATH) {
        Ok(config) => {
            println!("✅ provider: {}", config.kind().tag());
            true
        }
        Err(e) => {
            println!("❌ {}", e);
            println!("  Run 'democtl setup' to configure a provider");
            false
        }
    }
}

fn check_venv() -> bool {
    print!("Checking virtual environment... ");

    if Path::new(pyenv::VENV_DIR).exists() {
        println!("✅ {}", pyenv::VENV_DIR);
    } else {
        println!("ℹ️  Will be created on first 'democtl run'");
    }
    true
}

fn check_browser() -> bool {
    print!("Checking Chrome/Chromium... ");

    match browser::find_browser() {
        Some(path) => {
            println!("✅ {}", path.display());
            true
        }
        None => {
            println!("⚠️  Not found. PDF rendering in the resume demo will not work.");
            println!("  Install Google Chrome or Chromium to enable it.");
            true
        }
    }
}
