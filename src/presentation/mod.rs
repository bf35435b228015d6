// Presentation layer - Command-line transport
pub mod app_state;
pub mod cli;
pub mod handlers;
