// Discord commands module.
// Each feature gets its own command file.

pub mod bot_data;

pub mod chatbot;

pub mod fertilizer;

pub mod help;

pub mod prices;

pub mod reports;

pub mod todo;

// Bot presence management
pub mod presence;
