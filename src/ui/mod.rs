//! View helpers for the main window

pub mod confirm_dialog;
pub mod file_list;
pub mod results;
pub mod search_bar;
pub mod speech_panel;
pub mod theme;
