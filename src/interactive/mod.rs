//! Interactive TUI interface

mod app;
pub mod components;
mod rendering;

pub use app::{App, Hint, Message, MessageStyle, run_tui};
pub use rendering::ui;
