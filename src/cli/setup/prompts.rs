//! Prompt helpers with inquire → stdin fallback.
//!
//! When inquire cannot drive the terminal (not a real TTY), every prompt
//! degrades to a plain stdin read so the wizard still works under pipes.

use inquire::{Confirm, Password, Select, Text};
use std::io::{self, BufRead, Write};

/// Outcome of a menu prompt. Inquire can only yield a valid index; the stdin
/// fallback hands back whatever the operator typed.
pub enum Choice {
    Picked(usize),
    Raw(String),
}

fn read_line() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
    Ok(input.trim().to_string())
}

fn cancelled(err: &inquire::InquireError) -> bool {
    matches!(
        err,
        inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted
    )
}

/// Yes/no prompt.
pub fn confirm(message: &str, default: bool) -> anyhow::Result<bool> {
    match Confirm::new(message).with_default(default).prompt() {
        Ok(v) => Ok(v),
        Err(e) if cancelled(&e) => anyhow::bail!("Cancelled"),
        Err(_) => {
            let hint = if default { "Y/n" } else { "y/N" };
            print!("? {} ({}) ", message, hint);
            io::stdout().flush()?;
            match read_line()?.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Ok(default),
            }
        }
    }
}

/// Free-text prompt (may return an empty string).
pub fn text(message: &str) -> anyhow::Result<String> {
    match Text::new(message).prompt() {
        Ok(v) => Ok(v.trim().to_string()),
        Err(e) if cancelled(&e) => anyhow::bail!("Cancelled"),
        Err(_) => {
            print!("  {} ", message);
            io::stdout().flush()?;
            read_line()
        }
    }
}

/// Masked secret prompt (may return an empty string; the caller validates).
pub fn secret(message: &str) -> anyhow::Result<String> {
    match Password::new(message)
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
    {
        Ok(v) => Ok(v.trim().to_string()),
        Err(e) if cancelled(&e) => anyhow::bail!("Cancelled"),
        Err(_) => {
            print!("  {} ", message);
            io::stdout().flush()?;
            read_line()
        }
    }
}

/// Menu prompt. The fallback prints a numbered menu and returns the raw
/// input untouched so the caller can apply its own tolerant mapping.
pub fn choose(message: &str, options: &[String]) -> anyhow::Result<Choice> {
    match Select::new(message, options.to_vec()).raw_prompt() {
        Ok(selection) => Ok(Choice::Picked(selection.index)),
        Err(e) if cancelled(&e) => anyhow::bail!("Cancelled"),
        Err(_) => {
            println!();
            for (i, opt) in options.iter().enumerate() {
                println!("  [{}] {}", i + 1, opt);
            }
            println!();
            print!("  {} ", message);
            io::stdout().flush()?;
            Ok(Choice::Raw(read_line()?))
        }
    }
}
