//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputState, MAX_INPUT_LEN, Message, MessageStyle, run_tui};
pub use rendering::ui;
