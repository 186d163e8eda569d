pub mod gallery;
pub mod logging;
pub mod model;
pub mod remote;
pub mod sink;
pub mod tui;

mod tui_shell;
