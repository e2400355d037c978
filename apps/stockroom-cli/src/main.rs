//! # Stockroom Entry Point
//!
//! The setup lives in `lib.rs` so the command loop can be tested without a
//! terminal.

fn main() {
    if let Err(e) = stockroom_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
