//! CLI Interface: user input, terminal rendering and command handlers
//!
//! # Components
//! - `input.rs`: Line reading from stdin or a scripted source
//! - `display.rs`: Colored terminal rendering using crossterm
//! - `commands.rs`: stats, reset, add, remove and the study session

pub mod commands;
pub mod display;
pub mod input;

pub use display::Display;
pub use input::InputHandler;
