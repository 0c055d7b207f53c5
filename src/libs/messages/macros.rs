//! Convenient macros for application messaging and logging.
//!
//! In normal mode the macros print straight to the terminal. When debug mode
//! is on they emit `tracing` events instead, so messages interleave with the
//! structured log output of the core.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either environment variable is set:
//! - **`TDL_DEBUG`**: application-specific debug flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check runs once and is cached for the lifetime of the process.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tdl::{msg_error, msg_success};
//! use tdl::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded("Write report".to_string()));
//! msg_error!(Message::InvalidNumber);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TDL_DEBUG` or `RUST_LOG` is set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TDL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message. Pass `true` as a second argument to surround it
/// with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Errors go to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}
