//! Interactive provider setup for the demo suite.
//!
//! Flow:
//!   1. Existing store check (keep → no changes, overwrite → delete)
//!   2. Provider menu (Anthropic / OpenAI / Google / Proxy)
//!   3. Credential input (base URL + token for Proxy, one key otherwise)
//!   4. Validation (empty credential aborts, nothing written)
//!   5. Atomic save + summary

mod prompts;
mod providers;

use std::path::Path;

use prompts::Choice;
use providers::{entry, PROVIDERS};

use crate::config::{ProviderConfig, ProviderKind, STORE_PATH};

/// Print a styled header line.
fn print_header(text: &str) {
    let line = "━".repeat(60);
    println!();
    println!("  {}", line);
    println!("  {}", text);
    println!("  {}", line);
    println!();
}

/// Run the setup wizard. Exit code 1 on an empty required credential.
pub async fn run() -> anyhow::Result<()> {
    print_header("Demo Suite Setup");

    // ── 1. Existing store ──
    let store = Path::new(STORE_PATH);
    if store.exists() {
        let overwrite = prompts::confirm(".env already exists. Reconfigure it?", false)?;
        if !overwrite {
            println!("\n  Keeping existing configuration.");
            return Ok(());
        }
        // The old store is removed before new input is collected; aborting
        // after this point leaves no store behind.
        std::fs::remove_file(store)?;
    }

    // ── 2. Provider menu ──
    let options: Vec<String> = PROVIDERS.iter().map(|p| p.label.to_string()).collect();
    let kind = match prompts::choose("Which AI provider should the demos use?", &options)? {
        Choice::Picked(index) => PROVIDERS[index].kind,
        // Tolerant mapping: typos and unknown numbers land on the default.
        Choice::Raw(input) => ProviderKind::from_choice(&input),
    };
    let provider = entry(kind);
    println!("\n  Selected: {}", provider.label);
    if !provider.signup_url.is_empty() {
        println!("  Get a key at: {}", provider.signup_url);
    }
    println!();

    // ── 3-4. Credentials ──
    let base_url = match kind {
        ProviderKind::Proxy => {
            Some(prompts::text("Proxy base URL (e.g. https://your-proxy.example.com):")?)
        }
        _ => None,
    };
    let api_key = prompts::secret(provider.key_prompt)?;
    let config = ProviderConfig::from_credentials(kind, &api_key, base_url.as_deref())?;

    // ── 5. Save ──
    config.write_atomic(store)?;
    println!("\n  Saved {} (provider: {})", STORE_PATH, kind.tag());
    println!("  Start the demos with: democtl run\n");

    Ok(())
}
