// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "faq_mentions.rs"]
pub mod faq_mentions;

// Re-export command types for convenience
pub use commands::bot_data::{Context, Data, Error};
