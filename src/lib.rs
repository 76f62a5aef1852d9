//! Single-board Snake for the terminal.
//!
//! [`game::GameState`] holds the rules, [`session::Session`] wires the tick
//! timer and key listener to the game lifecycle, and [`renderer`] paints a
//! state into a ratatui frame.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
