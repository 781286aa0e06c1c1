//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Field, Message, MessageStyle, run_tui};
