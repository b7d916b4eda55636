//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Run analysis strategies and print reports
//! - `config` - Config loading and display
//! - `transactions` - Transaction listing

pub mod analyze;
pub mod config;
pub mod transactions;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
