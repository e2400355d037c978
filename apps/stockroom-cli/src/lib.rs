//! # Stockroom CLI Library
//!
//! Wires terminal I/O, configuration and logging around `stockroom-core`.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── Interactive command loop
//! ├── command.rs      ◄─── Command keywords and menu
//! ├── config.rs       ◄─── STOCKROOM_* environment configuration
//! └── error.rs        ◄─── Fatal error type
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use command::Command;
pub use config::{CliConfig, ConfigError};
pub use error::{CliError, CliResult};
pub use session::Session;

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` or `warn`)
/// 2. Load `CliConfig` from the environment
/// 3. Run the command loop until `exit` or end of input
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = CliConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so the prompt conversation on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched command
/// - `RUST_LOG=stockroom_cli=info` - Session start/end only
/// - Default: WARN (rejected operations)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
