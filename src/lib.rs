//! Spotify Proxy Library
//!
//! This library provides a thin HTTP backend that sits between a browser
//! frontend and the Spotify Web API. It starts the OAuth 2.0 authorization-code
//! flow, exchanges the returned code for tokens and forwards a fixed set of
//! player, search and playlist calls with the caller's bearer token.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the proxy endpoints
//! - `config` - Configuration loading and validation
//! - `server` - Router assembly and the listening server
//! - `spotify` - Spotify Web API client (token exchange and forwarding)
//! - `types` - Request and response data structures
//! - `utils` - Small pure helpers shared by the handlers
//!
//! # Example
//!
//! ```
//! use spotify_proxy::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotify_proxy::Res<()> {
//!     config::load_env(None);
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup errors such as missing credentials. Request
/// handlers never call this; they log with [`warning!`] and answer the caller.
///
/// # Example
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures, most notably upstream errors that are
/// relayed back to the caller.
///
/// # Example
///
/// ```
/// warning!("Failed to pause playback: upstream status 403");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
