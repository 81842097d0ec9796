//! democtl - Setup and launch supervisor for the AI demo suite
//!
//! Two independent pieces:
//! - the setup wizard, which writes the provider configuration store, and
//! - the launcher, which prepares the Python environment and supervises the
//!   demo processes as a group.

#![forbid(unsafe_code)]

pub mod browser;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod launcher;
pub mod pyenv;
