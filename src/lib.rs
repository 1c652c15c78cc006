//! JioSaavn Gateway Library
//!
//! This library re-exposes the undocumented JioSaavn web API as a small,
//! consistent REST surface. Every route validates its query parameters,
//! performs a single upstream call through a retrying fetcher, reshapes the
//! provider's loosely typed JSON into stable output records and wraps the
//! result in a common response envelope.
//!
//! # Modules
//!
//! - `api` - HTTP handlers, validators, error mapping and middleware
//! - `config` - Configuration management and environment variables
//! - `management` - Stateful collaborators (response cache)
//! - `payload` - Normalizers turning raw upstream records into output records
//! - `saavn` - Upstream client: query builder, retry policy, raw models
//! - `server` - Router assembly and HTTP server bootstrap
//! - `types` - Shared output types (envelope, quality links)
//! - `utils` - Link parsing, language filtering, text helpers
//!
//! # Example
//!
//! ```
//! use saavn_gateway::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> saavn_gateway::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::Settings::from_env()).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod payload;
pub mod saavn;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the edges of the application (startup, server bootstrap) where
/// errors from several layers meet and are only reported, never matched on.
/// Inner layers use their own typed errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Only used for human-facing console output of the binary (startup
/// banner, completions). Request handling logs through `tracing`.
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

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures, e.g. an address that cannot
/// be bound. Never used inside request handling.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
